//! Fixed-size placement grid with monotonic slot filling
//!
//! Slots are addressed by `(column, row)` and store the index of the tile
//! placed there. A slot can be filled once; nothing is ever overwritten or cleared.

use ndarray::Array2;

use crate::io::error::{PuzzleError, Result};

/// Grid of tile indices, stored row-major as `[row, column]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    slots: Array2<Option<usize>>,
    filled: usize,
}

impl Grid {
    /// Create an empty grid of `columns x rows` slots
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            slots: Array2::from_elem((rows, columns), None),
            filled: 0,
        }
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.slots.ncols()
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.slots.nrows()
    }

    /// Number of slots already filled
    pub const fn filled(&self) -> usize {
        self.filled
    }

    /// Whether every slot holds a tile
    pub fn is_complete(&self) -> bool {
        self.filled == self.slots.len()
    }

    /// Tile index at a position, if one has been placed
    pub fn get(&self, column: usize, row: usize) -> Option<usize> {
        self.slots.get([row, column]).copied().flatten()
    }

    /// Record `tile` at a position
    ///
    /// # Errors
    ///
    /// Returns `GridConflict` if the position is outside the grid or the
    /// slot is already occupied
    pub fn fill(&mut self, column: usize, row: usize, tile: usize) -> Result<()> {
        let slot = self
            .slots
            .get_mut([row, column])
            .ok_or(PuzzleError::GridConflict {
                column,
                row,
                reason: "position is outside the grid",
            })?;

        if slot.is_some() {
            return Err(PuzzleError::GridConflict {
                column,
                row,
                reason: "slot is already occupied",
            });
        }

        *slot = Some(tile);
        self.filled += 1;
        Ok(())
    }

    /// Tile indices row by row, `None` for empty slots
    pub fn to_rows(&self) -> Vec<Vec<Option<usize>>> {
        self.slots.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}
