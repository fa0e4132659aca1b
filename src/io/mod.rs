//! Input/output: tile loading, placement sinks, error types and the CLI

/// Command-line interface and run orchestration
pub mod cli;
/// Grid, geometry and file naming constants
pub mod configuration;
/// Error types and context management
pub mod error;
/// Canvas composition and image export
pub mod image;
/// Tile loaders and parallel tile construction
pub mod loader;
/// Progress bars for loading and placement
pub mod progress;
/// Cutting and shuffling a picture into tiles
pub mod scramble;
/// Placement notification
pub mod sink;
