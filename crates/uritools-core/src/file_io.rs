//! Whole-file binary read and write.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::FileError;

/// Reads the whole file at `path`.
///
/// A missing file is [`FileError::NotFound`]; an empty file is an empty buffer.
pub fn read_binary_file(path: impl AsRef<Path>) -> Result<Vec<u8>, FileError> {
    let path = path.as_ref();
    let mut f = File::open(path).map_err(|e| FileError::from_io(path, e))?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf)
        .map_err(|e| FileError::from_io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = buf.len(), "read binary file");
    Ok(buf)
}

/// Creates or truncates `path` and writes `data` to it.
///
/// The file is synced and closed before returning, so it can be read back
/// immediately. Every failure, including a missing parent directory, is
/// [`FileError::Io`].
pub fn write_binary_file(path: impl AsRef<Path>, data: &[u8]) -> Result<(), FileError> {
    let path = path.as_ref();
    let mut f = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| FileError::io(path, e))?;
    f.write_all(data).map_err(|e| FileError::io(path, e))?;
    f.flush().map_err(|e| FileError::io(path, e))?;
    f.sync_all().map_err(|e| FileError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "wrote binary file");
    Ok(())
}
