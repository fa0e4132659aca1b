//! Greedy reconstruction of a shuffled grid of image tiles
//!
//! Every tile carries colour signatures of its four borders. A single
//! anchor tile identified by its dimensions is fixed at the top-left
//! corner; the first column and then each row are grown by repeatedly
//! choosing the unplaced tile whose facing border best matches the tile
//! placed just before it.

#![forbid(unsafe_code)]

/// Greedy assembly, border scoring and candidate selection
pub mod algorithm;
/// Role classification of tiles by their dimensions
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Border signatures, tile records and the placement grid
pub mod spatial;

pub use io::error::{PuzzleError, Result};
