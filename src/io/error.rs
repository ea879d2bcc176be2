//! Error types and context management for mosaic operations

use crate::spatial::tile::TileId;
use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Input text does not follow the tile block format
    Parse {
        /// 1-based line number in the input where the problem was found
        line: usize,
        /// Description of what is malformed
        reason: String,
    },

    /// Parsed tiles cannot form a puzzle
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Tile count has no integer square root, so no square grid exists
    NotPerfectSquare {
        /// Number of tiles supplied
        tile_count: usize,
    },

    /// Backtracking search exhausted every placement without completing the grid
    NoSolution {
        /// Number of tiles supplied
        tile_count: usize,
        /// Side length of the grid that was attempted
        side: usize,
    },

    /// Border removal requested on a tile that was already stripped
    BorderAlreadyRemoved {
        /// Identifier of the offending tile
        id: TileId,
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

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line, reason } => {
                write!(f, "Parse error on line {line}: {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::NotPerfectSquare { tile_count } => {
                write!(
                    f,
                    "Cannot arrange {tile_count} tiles in a square grid: count is not a perfect square"
                )
            }
            Self::NoSolution { tile_count, side } => {
                write!(
                    f,
                    "No arrangement of {tile_count} tiles satisfies every edge in a {side}x{side} grid"
                )
            }
            Self::BorderAlreadyRemoved { id } => {
                write!(f, "Border of tile {id} has already been removed")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext<'a> {
    /// File the failing operation touched
    pub path: Option<&'a Path>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with the file and operation that failed
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext<'_>) -> Result<T>;

    /// Add the path and operation of a file system access
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path context applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<AlgorithmError>,
{
    fn with_context(self, context: ErrorContext<'_>) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only file system errors carry a location worth replacing
            if let AlgorithmError::FileSystem {
                path, operation, ..
            } = &mut error
            {
                if let Some(context_path) = context.path {
                    *path = context_path.to_path_buf();
                }
                if let Some(context_operation) = context.operation {
                    *operation = context_operation;
                }
            }
            error
        })
    }

    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path),
            operation: Some(operation),
        })
    }
}

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a parse error for the given 1-based line
pub fn parse_error(line: usize, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::Parse {
        line,
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source(reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::InvalidSourceData {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
