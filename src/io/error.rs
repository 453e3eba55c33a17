//! Error types and context management for tile assembly operations

use std::fmt;
use std::path::PathBuf;

use crate::spatial::tile::TileId;

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilingError {
    /// Tile text could not be tokenized
    Parse {
        /// 1-based line number in the source text
        line: usize,
        /// Description of what was expected
        reason: String,
    },

    /// A tile violates the shape requirements of the run
    ///
    /// Covers non-square tiles, sides outside the supported range,
    /// side mismatches across tiles and duplicated ids.
    MalformedTile {
        /// Id of the offending tile
        id: TileId,
        /// Description of the violation
        reason: String,
    },

    /// The number of tiles is not a perfect square
    InvalidTileCount {
        /// Number of tiles supplied
        count: usize,
    },

    /// Corner detection did not find exactly one image corner
    ///
    /// A well-posed puzzle exposes 8 corner tile-orientations spread over
    /// 4 physical tiles (one per orientation of the final image).
    AmbiguousCorner {
        /// Number of tile-orientations satisfying the corner condition
        candidates: usize,
        /// Number of physical tiles among those candidates
        distinct_tiles: usize,
    },

    /// A border walk (top row or left column) has no unique completion
    AssemblyStuck {
        /// Which walk failed
        walk: &'static str,
        /// Number of complete paths found (0 or more than 1)
        complete_paths: usize,
    },

    /// An interior cell has zero or several fitting tile-orientations
    AssemblyConflict {
        /// Placement row of the cell
        row: usize,
        /// Placement column of the cell
        col: usize,
        /// Number of unused tile-orientations fitting both neighbours
        candidates: usize,
    },

    /// No orientation of the composed image contains the mask
    PatternNotFound {
        /// Mask dimensions (rows, cols)
        mask_dimensions: (usize, usize),
        /// Image dimensions (rows, cols)
        image_dimensions: (usize, usize),
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the composed image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line, reason } => write!(f, "Parse error on line {line}: {reason}"),
            Self::MalformedTile { id, reason } => write!(f, "Malformed tile {id}: {reason}"),
            Self::InvalidTileCount { count } => {
                write!(f, "Tile count {count} is not a perfect square")
            }
            Self::AmbiguousCorner {
                candidates,
                distinct_tiles,
            } => {
                write!(
                    f,
                    "Ambiguous corner: {candidates} candidate orientations over {distinct_tiles} tiles (expected 8 orientations)"
                )
            }
            Self::AssemblyStuck {
                walk,
                complete_paths,
            } => {
                write!(
                    f,
                    "Assembly stuck while placing the {walk}: {complete_paths} complete paths (expected 1)"
                )
            }
            Self::AssemblyConflict {
                row,
                col,
                candidates,
            } => {
                write!(
                    f,
                    "Assembly conflict at cell ({row}, {col}): {candidates} candidates (expected 1)"
                )
            }
            Self::PatternNotFound {
                mask_dimensions,
                image_dimensions,
            } => {
                write!(
                    f,
                    "Pattern {}x{} not found in any orientation of the {}x{} image",
                    mask_dimensions.0, mask_dimensions.1, image_dimensions.0, image_dimensions.1
                )
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
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File being processed
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches errors with the file and operation they occurred in
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add the path and operation context for file system failures
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<TilingError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only file-backed errors carry a location
            match &mut error {
                TilingError::FileSystem {
                    path, operation, ..
                } => {
                    if let Some(context_path) = context.path {
                        *path = context_path;
                    }
                    if let Some(context_operation) = context.operation {
                        *operation = context_operation;
                    }
                }
                TilingError::ImageExport { path, .. } => {
                    if let Some(context_path) = context.path {
                        *path = context_path;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.into()),
            operation: Some(operation),
        })
    }
}

impl From<image::ImageError> for TilingError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TilingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
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
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> TilingError {
    TilingError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a malformed tile error
pub fn malformed_tile(id: TileId, reason: &impl ToString) -> TilingError {
    TilingError::MalformedTile {
        id,
        reason: reason.to_string(),
    }
}
