// error.rs — Error types for the workspace subsystem.

use std::path::PathBuf;
use thiserror::Error;

use demokit_caller::CallerError;

/// Errors that can occur during workspace operations.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// The calling source file could not be determined.
    #[error(transparent)]
    Caller(#[from] CallerError),

    /// A line of an indented text block does not carry the block's indent.
    #[error(
        "indentation mismatch at line {line}: expected {expected} leading whitespace character(s)"
    )]
    IndentationMismatch { line: usize, expected: usize },

    /// A relative file path tries to leave the workspace directory.
    #[error("path traversal detected: '{path}' resolves outside workspace directory")]
    PathTraversal { path: String },

    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize JSON content.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A workspace options file could not be parsed.
    #[error("invalid workspace options in {path}: {reason}")]
    ConfigError { path: PathBuf, reason: String },
}
