//! Error types and path context for decomposition operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all decomposition operations
#[derive(Debug)]
pub enum DecompositionError {
    /// No tile placement produces the requested subdomain count
    ///
    /// Occurs when:
    /// - No size/offset in the searched range yields exactly the requested count
    /// - No count was requested and the mask has no wet cells at all
    NoFeasiblePlacement {
        /// Requested subdomain count (None in minimal-count mode)
        requested: Option<usize>,
        /// Description of the searched configuration
        attempted: String,
    },

    /// Mask source text could not be turned into a rectangular grid
    MalformedMask {
        /// One-based line number of the offending row (0 for whole-file problems)
        line: usize,
        /// Description of what's wrong with the row
        reason: String,
    },

    /// Size, offset or count validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Decomposition text does not follow the subdomain file layout
    MalformedDecomposition {
        /// One-based line number where parsing failed
        line: usize,
        /// Description of the failure
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
}

impl fmt::Display for DecompositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFeasiblePlacement {
                requested: Some(count),
                attempted,
            } => {
                write!(
                    f,
                    "No placement yields {count} subdomains (tried {attempted})"
                )
            }
            Self::NoFeasiblePlacement {
                requested: None,
                attempted,
            } => {
                write!(
                    f,
                    "No placement yields a non-empty subdomain (tried {attempted})"
                )
            }
            Self::MalformedMask { line, reason } => {
                if *line == 0 {
                    write!(f, "Malformed mask: {reason}")
                } else {
                    write!(f, "Malformed mask at line {line}: {reason}")
                }
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MalformedDecomposition { line, reason } => {
                write!(f, "Malformed decomposition at line {line}: {reason}")
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

impl std::error::Error for DecompositionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for decomposition results
pub type Result<T> = std::result::Result<T, DecompositionError>;

/// Attaches the file path and operation to raw I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into a [`DecompositionError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| DecompositionError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for DecompositionError {
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
) -> DecompositionError {
    DecompositionError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed mask error
pub fn malformed_mask(line: usize, reason: &impl ToString) -> DecompositionError {
    DecompositionError::MalformedMask {
        line,
        reason: reason.to_string(),
    }
}

/// Create a malformed decomposition error
pub fn malformed_decomposition(line: usize, reason: &impl ToString) -> DecompositionError {
    DecompositionError::MalformedDecomposition {
        line,
        reason: reason.to_string(),
    }
}
