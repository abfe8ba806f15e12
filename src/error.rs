//! Error type shared by every py_to_rpy operation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for transpile, combine and cleanup operations
#[derive(Error, Debug)]
pub enum PyToRpyError {
    /// Rule file missing, unreadable or malformed
    #[error("Config error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// File could not be read, written or removed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Destination directory could not be created
    #[error("Failed to create directory {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input pattern rejected by the glob parser
    #[error("Invalid file pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
}

impl PyToRpyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PyToRpyError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        PyToRpyError::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PyToRpyError>;
