//! Error types shared by the conversion and file helpers.

use std::path::PathBuf;
use thiserror::Error;

/// Why a string could not be turned into a local path.
///
/// Path conversion is soft-fail: callers that only want a display value can
/// `unwrap_or_default()` and get an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedUri {
    #[error("uri too short to be a file uri ({len} bytes)")]
    TooShort { len: usize },

    #[error("uri does not start with file:// or FILE://")]
    NotFileUri,
}

/// Failure reading or writing a whole file.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("i/o error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not find a free temp file name in {}", .dir.display())]
    TempExhausted { dir: PathBuf },
}

impl FileError {
    /// Wrap an `io::Error` for `path` without reclassifying it.
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        FileError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Map a read-side `io::Error` for `path`, keeping "not found" distinguishable.
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            FileError::NotFound(path.to_path_buf())
        } else {
            FileError::io(path, source)
        }
    }
}

/// Invalid input to a UTF-8 / UTF-16 conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("unpaired utf-16 surrogate at unit {index}")]
    UnpairedSurrogate { index: usize },

    #[error("invalid utf-8 after byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },
}
