//! Analysis of tile geometry ahead of assembly

/// Role assignment from tile dimensions and pool partitioning
pub mod classification;
