//! Placement sinks receiving tiles as the assembler fixes them in place

use crate::spatial::Tile;

/// Consumer of finished placements
///
/// Called once per slot, in placement order, each time with a fresh
/// `(column, row)`. Calls already made are never retracted, even if
/// assembly fails later.
pub trait PlacementSink {
    /// Record `tile` at `(column, row)`
    fn place(&mut self, tile: &Tile, column: usize, row: usize);
}

impl<F> PlacementSink for F
where
    F: FnMut(&Tile, usize, usize),
{
    fn place(&mut self, tile: &Tile, column: usize, row: usize) {
        self(tile, column, row);
    }
}

/// One recorded placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Id of the placed tile
    pub tile_id: usize,
    /// Grid column
    pub column: usize,
    /// Grid row
    pub row: usize,
}

/// Sink that remembers every placement in call order
#[derive(Debug, Clone, Default)]
pub struct PlacementLog {
    placements: Vec<Placement>,
}

impl PlacementLog {
    /// Create an empty log
    pub const fn new() -> Self {
        Self {
            placements: Vec::new(),
        }
    }

    /// Placements in the order they were received
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// `(column, row)` pairs in the order they were received
    pub fn positions(&self) -> Vec<(usize, usize)> {
        self.placements
            .iter()
            .map(|placement| (placement.column, placement.row))
            .collect()
    }

    /// Number of placements received
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether nothing has been placed yet
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

impl PlacementSink for PlacementLog {
    fn place(&mut self, tile: &Tile, column: usize, row: usize) {
        self.placements.push(Placement {
            tile_id: tile.id(),
            column,
            row,
        });
    }
}
