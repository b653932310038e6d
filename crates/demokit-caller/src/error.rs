// error.rs — Error types for call-site resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving the calling source file.
#[derive(Debug, Error)]
pub enum CallerError {
    /// The compiler-recorded location could not be mapped to a file on disk.
    #[error("unable to determine caller location '{file}': {reason}")]
    LocationUnresolved { file: String, reason: String },

    /// A filesystem lookup failed while resolving the location.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
}
