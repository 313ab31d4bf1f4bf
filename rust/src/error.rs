//! Error handling and result types for BTree operations.
//!
//! Only construction, loading and validation can fail. A missing key is an
//! ordinary outcome (`None` / `false`), except for the validating
//! `try_delete`, which reports it as [`BTreeError::KeyNotFound`].

use std::io;
use std::path::Path;

use thiserror::Error;

/// Error type for B-tree operations.
#[derive(Debug, Error)]
pub enum BTreeError {
    /// Minimum degree below the supported floor.
    #[error("invalid minimum degree {degree} (minimum required: {min})")]
    InvalidDegree { degree: usize, min: usize },

    /// The loader was handed an empty path.
    #[error("key source path is empty")]
    EmptySource,

    /// Reading the key source failed.
    #[error("failed to read keys from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Structural invariant violated.
    #[error("data integrity error: {0}")]
    DataIntegrity(String),

    /// Key not found in the tree.
    #[error("key not found in tree")]
    KeyNotFound,
}

impl BTreeError {
    /// Create an InvalidDegree error.
    pub fn invalid_degree(degree: usize, min: usize) -> Self {
        Self::InvalidDegree { degree, min }
    }

    /// Create a DataIntegrity error with context.
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrity(format!("{}: {}", context, details))
    }

    /// Create an Io error for the given source path.
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// Check if this error is a degree error.
    pub fn is_degree_error(&self) -> bool {
        matches!(self, Self::InvalidDegree { .. })
    }

    /// Check if this error reports a structural violation.
    pub fn is_integrity_error(&self) -> bool {
        matches!(self, Self::DataIntegrity(_))
    }
}

/// Public result type for tree operations that may fail.
pub type BTreeResult<T> = Result<T, BTreeError>;

/// Result type for tree construction.
pub type InitResult<T> = Result<T, BTreeError>;

/// Result type for validated tree modifications.
pub type ModifyResult<T> = Result<T, BTreeError>;

/// Result extension trait for adding context to integrity errors.
pub trait BTreeResultExt<T> {
    /// Prefix the message of an integrity error with `context`.
    fn with_context(self, context: &str) -> BTreeResult<T>;
}

impl<T> BTreeResultExt<T> for BTreeResult<T> {
    fn with_context(self, context: &str) -> BTreeResult<T> {
        self.map_err(|e| match e {
            BTreeError::DataIntegrity(msg) => BTreeError::data_integrity(context, &msg),
            other => other,
        })
    }
}
