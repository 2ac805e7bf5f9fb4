//! Error types for path parsing and tree navigation.

use thiserror::Error;

use crate::document::node::NodeKind;

/// Errors that can occur while parsing a path string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A bracket suffix held something other than a canonical non-negative integer.
    #[error("{reason}: {prefix}")]
    InvalidSegment {
        /// Raw path text up to and including the malformed part.
        prefix: String,
        reason: SegmentFault,
    },
}

impl PathError {
    pub fn prefix(&self) -> &str {
        match self {
            PathError::InvalidSegment { prefix, .. } => prefix,
        }
    }
}

/// Why a bracket body was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SegmentFault {
    #[error("invalid index")]
    InvalidIndex,
    #[error("negative index")]
    NegativeIndex,
}

/// Errors that can occur during `get` or `set`.
///
/// Every navigation error carries the canonical text of the path consumed up to
/// and including the segment that failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error(transparent)]
    InvalidPath(#[from] PathError),

    #[error("not found: {path}")]
    NotFound { path: String },

    #[error("not a mapping: {path} (found {found})")]
    NotAMapping { path: String, found: NodeKind },

    #[error("not a sequence: {path} (found {found})")]
    NotASequence { path: String, found: NodeKind },

    #[error("index out of range: {path} (index {index}, length {len})")]
    IndexOutOfRange {
        path: String,
        index: usize,
        len: usize,
    },

    #[error("unsupported key type: {path}")]
    UnsupportedKeyType { path: String },

    #[error("cannot set a value at an empty path")]
    EmptyPath,
}

impl AccessError {
    /// Returns the path prefix reported with this error, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            AccessError::InvalidPath(e) => Some(e.prefix()),
            AccessError::NotFound { path }
            | AccessError::NotAMapping { path, .. }
            | AccessError::NotASequence { path, .. }
            | AccessError::IndexOutOfRange { path, .. }
            | AccessError::UnsupportedKeyType { path } => Some(path),
            AccessError::EmptyPath => None,
        }
    }
}
