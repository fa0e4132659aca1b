//! Dimension-based role assignment and pool partitioning
//!
//! The source picture is sliced so that neighbouring cells share a pixel
//! line, which leaves the top-left cell one row shorter than the rest of
//! the first column and the first column one pixel narrower than the
//! others. Tile dimensions alone therefore identify the anchor and the
//! left-column members.

use std::fmt;

use crate::io::configuration::{ANCHOR_HEIGHT, ANCHOR_WIDTH, CELL_OVERLAP, STANDARD_HEIGHT};
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::spatial::Tile;

/// Structural category of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The unique tile placed at `(0, 0)`
    Anchor,
    /// Tiles that fill column 0 below the anchor
    LeftColumnMember,
    /// Every other tile
    GeneralMember,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Anchor => "anchor",
            Self::LeftColumnMember => "left-column",
            Self::GeneralMember => "general",
        };
        f.write_str(name)
    }
}

/// Expected pixel dimensions per role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGeometry {
    /// Width of the anchor and of every left-column tile
    pub anchor_width: u32,
    /// Height of the anchor
    pub anchor_height: u32,
    /// Height of every left-column tile below the anchor
    pub standard_height: u32,
}

impl Default for RoleGeometry {
    fn default() -> Self {
        Self {
            anchor_width: ANCHOR_WIDTH,
            anchor_height: ANCHOR_HEIGHT,
            standard_height: STANDARD_HEIGHT,
        }
    }
}

impl RoleGeometry {
    /// Assign a role from pixel dimensions
    pub const fn role_of(&self, width: u32, height: u32) -> Role {
        if width == self.anchor_width && height == self.anchor_height {
            Role::Anchor
        } else if width == self.anchor_width && height == self.standard_height {
            Role::LeftColumnMember
        } else {
            Role::GeneralMember
        }
    }

    /// Check the geometry can tell the roles apart
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a dimension is zero, if left-column
    /// tiles aren't exactly one shared border line taller than the anchor,
    /// or if the anchor is no larger than that border
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("anchor_width", self.anchor_width),
            ("anchor_height", self.anchor_height),
            ("standard_height", self.standard_height),
        ] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
        }

        if self.overlap() != CELL_OVERLAP {
            return Err(invalid_parameter(
                "standard_height",
                &self.standard_height,
                &format!(
                    "must be anchor_height + {CELL_OVERLAP} ({}) so neighbours share one border line",
                    self.anchor_height.saturating_add(CELL_OVERLAP)
                ),
            ));
        }

        if CELL_OVERLAP >= self.anchor_width || CELL_OVERLAP >= self.anchor_height {
            return Err(invalid_parameter(
                "anchor_width",
                &self.anchor_width,
                &format!(
                    "a {}x{} anchor leaves nothing beside the shared border",
                    self.anchor_width, self.anchor_height
                ),
            ));
        }

        Ok(())
    }

    /// Pixels shared between neighbouring cells
    ///
    /// Left-column tiles carry the shared line above them, so the overlap
    /// is how much taller they are than the anchor. Validation pins it to
    /// [`CELL_OVERLAP`].
    pub const fn overlap(&self) -> u32 {
        self.standard_height.saturating_sub(self.anchor_height)
    }
}

/// A complete tile set split by role
///
/// Pools hold indices into `tiles` in input order.
#[derive(Debug, Clone)]
pub struct ClassifiedTiles {
    tiles: Vec<Tile>,
    anchor: usize,
    left_column: Vec<usize>,
    general: Vec<usize>,
}

impl ClassifiedTiles {
    /// Split tiles by the role they were given at construction
    ///
    /// # Errors
    ///
    /// Returns `Classification` unless exactly one tile is an anchor
    pub fn partition(tiles: Vec<Tile>) -> Result<Self> {
        let mut anchors = Vec::new();
        let mut left_column = Vec::new();
        let mut general = Vec::new();

        for (index, tile) in tiles.iter().enumerate() {
            match tile.role() {
                Role::Anchor => anchors.push(index),
                Role::LeftColumnMember => left_column.push(index),
                Role::GeneralMember => general.push(index),
            }
        }

        let anchor = match anchors.as_slice() {
            [single] => *single,
            _ => {
                return Err(PuzzleError::Classification {
                    anchor_count: anchors.len(),
                });
            }
        };

        log::info!(
            "classified {} tiles: anchor #{}, {} left-column, {} general",
            tiles.len(),
            tiles.get(anchor).map_or(anchor, Tile::id),
            left_column.len(),
            general.len()
        );

        Ok(Self {
            tiles,
            anchor,
            left_column,
            general,
        })
    }

    /// Every tile in input order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Index of the anchor tile
    pub const fn anchor(&self) -> usize {
        self.anchor
    }

    /// Indices of left-column members in input order
    pub fn left_column(&self) -> &[usize] {
        &self.left_column
    }

    /// Indices of general members in input order
    pub fn general(&self) -> &[usize] {
        &self.general
    }

    /// Consume the set and return all its components
    pub fn into_parts(self) -> (Vec<Tile>, usize, Vec<usize>, Vec<usize>) {
        (self.tiles, self.anchor, self.left_column, self.general)
    }
}
