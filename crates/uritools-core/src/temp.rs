//! Unique temporary file paths.
//!
//! Names combine the process id, a process-wide counter and a per-process
//! random key, and any candidate that already exists is skipped. The file
//! itself is never created here.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use crate::error::FileError;

const MAX_ATTEMPTS: usize = 64;

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unique path in the system temp directory.
pub fn unique_temp_file_path() -> Result<PathBuf, FileError> {
    unique_temp_file_path_in(&std::env::temp_dir())
}

/// Unique path inside `dir`.
pub fn unique_temp_file_path_in(dir: &Path) -> Result<PathBuf, FileError> {
    for _ in 0..MAX_ATTEMPTS {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let candidate = dir.join(format!(
            "uritools-{}-{}-{:016x}.tmp",
            std::process::id(),
            n,
            random_suffix(n)
        ));
        if !candidate.exists() {
            return Ok(candidate);
        }
        tracing::debug!(path = %candidate.display(), "temp name taken, retrying");
    }
    Err(FileError::TempExhausted {
        dir: dir.to_path_buf(),
    })
}

fn random_suffix(n: u64) -> u64 {
    static KEYS: OnceLock<RandomState> = OnceLock::new();
    let mut h = KEYS.get_or_init(RandomState::new).build_hasher();
    h.write_u64(n);
    h.finish()
}
