//! Error types and context management for loading, classification and assembly

use crate::analysis::classification::Role;
use std::fmt;
use std::path::PathBuf;

/// Placeholder used until a loader attaches the real tile identifier
pub const UNKNOWN_IDENTIFIER: &str = "<unknown>";

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Failed to decode a tile image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Tile input has unusable dimensions or a malformed pixel buffer
    InvalidTileData {
        /// Identifier of the offending tile input
        identifier: String,
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Number of tile inputs doesn't match the grid size
    TileCount {
        /// Tiles required to fill the grid
        expected: usize,
        /// Tiles actually supplied
        found: usize,
    },

    /// The tile set doesn't contain exactly one anchor-shaped tile
    Classification {
        /// Number of tiles that matched the anchor dimensions
        anchor_count: usize,
    },

    /// A pool had no eligible candidate for a slot that still needed filling
    ///
    /// Occurs when either:
    /// - The pool for the role is already exhausted
    /// - Every remaining candidate is incompatible with the previous tile
    NoCandidate {
        /// Role of the pool that ran dry
        role: Role,
        /// Grid column being filled
        column: usize,
        /// Grid row being filled
        row: usize,
    },

    /// Tile index exceeds the tile set
    InvalidTileIndex {
        /// The invalid tile index
        index: usize,
        /// Number of tiles in the set
        max_tiles: usize,
    },

    /// A grid slot was addressed twice or outside the grid
    GridConflict {
        /// Grid column
        column: usize,
        /// Grid row
        row: usize,
        /// Why the placement was refused
        reason: &'static str,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the assembled image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// An output directory couldn't be created
    OutputDirectory {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// File system failure while reading tile inputs
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Coarse failure category so callers can tell bad input from non-convergence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Tile inputs failed to materialize
    Load,
    /// Anchor count was not exactly one
    Classification,
    /// Assembly could not find a tile for some slot
    NoCandidate,
    /// Invalid configuration
    Configuration,
    /// Writing results failed
    Output,
}

impl PuzzleError {
    /// Category of this failure
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ImageLoad { .. }
            | Self::InvalidTileData { .. }
            | Self::TileCount { .. }
            | Self::InvalidTileIndex { .. }
            | Self::FileSystem { .. } => ErrorKind::Load,
            Self::Classification { .. } => ErrorKind::Classification,
            Self::NoCandidate { .. } => ErrorKind::NoCandidate,
            Self::InvalidParameter { .. } => ErrorKind::Configuration,
            Self::GridConflict { .. }
            | Self::ImageExport { .. }
            | Self::OutputDirectory { .. } => ErrorKind::Output,
        }
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load tile '{}': {source}", path.display())
            }
            Self::InvalidTileData { identifier, reason } => {
                write!(f, "Invalid tile data for '{identifier}': {reason}")
            }
            Self::TileCount { expected, found } => {
                write!(f, "Expected {expected} tiles but {found} were supplied")
            }
            Self::Classification { anchor_count } => {
                write!(
                    f,
                    "Expected exactly one anchor tile, found {anchor_count}"
                )
            }
            Self::NoCandidate { role, column, row } => {
                write!(
                    f,
                    "No {role} candidate left for position ({column}, {row})"
                )
            }
            Self::InvalidTileIndex { index, max_tiles } => {
                write!(f, "Tile index {index} is out of bounds (tiles: {max_tiles})")
            }
            Self::GridConflict {
                column,
                row,
                reason,
            } => {
                write!(f, "Cannot place tile at ({column}, {row}): {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::OutputDirectory { path, source } => {
                write!(
                    f,
                    "Failed to create output directory '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::OutputDirectory { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Path of the tile input being processed
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Attaches loader state to errors raised further down
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the tile path
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<PuzzleError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only errors created without a location benefit from the path
            match &mut error {
                PuzzleError::ImageLoad { path, .. } => {
                    if let Some(context_path) = &context.path {
                        *path = context_path.clone();
                    }
                }
                PuzzleError::InvalidTileData { identifier, .. } => {
                    if let Some(context_path) = &context.path {
                        *identifier = context_path.display().to_string();
                    }
                }
                PuzzleError::FileSystem {
                    path, operation, ..
                } => {
                    if let Some(context_path) = &context.path {
                        *path = context_path.clone();
                    }
                    if let Some(op) = context.operation {
                        *operation = op;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.into()),
            ..Default::default()
        })
    }
}

impl From<image::ImageError> for PuzzleError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from(UNKNOWN_IDENTIFIER),
            source: err,
        }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_IDENTIFIER),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid tile data error without a known identifier
pub fn invalid_tile(reason: &impl ToString) -> PuzzleError {
    PuzzleError::InvalidTileData {
        identifier: UNKNOWN_IDENTIFIER.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a path-related error for CLI target validation
pub fn io_error(msg: &str) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
