//! Spatial data structures for tiles and their placement
//!
//! This module contains spatial-related functionality including:
//! - Border signature extraction
//! - Tile records
//! - The placement grid

/// Border signature extraction
pub mod edges;
/// Placement grid with monotonic slot filling
pub mod grid;
/// Tile records built from decoded buffers
pub mod tiles;

pub use grid::Grid;
pub use tiles::{RawTile, Tile};
