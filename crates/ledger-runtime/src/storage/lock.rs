//! # Data Directory Locking
//!
//! Two runtimes writing one data directory would interleave snapshot
//! rewrites. The lock is an exclusive `fs2` file lock on `LOCK`, held for
//! the life of the runtime and released on drop.

use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum LockError {
    #[error("Failed to create lock file {}: {source}", .path.display())]
    CreateFailed { path: PathBuf, source: io::Error },

    #[error("Data directory {} already in use (holder pid {:?})", .path.display(), .pid)]
    AlreadyLocked { pid: Option<u32>, path: PathBuf },

    #[error("Failed to write PID to lock file: {0}")]
    WriteFailed(io::Error),
}

/// Exclusive lock on a data directory.
#[derive(Debug)]
pub struct DataDirLock {
    file: File,
    path: PathBuf,
}

impl DataDirLock {
    const LOCK_FILE: &'static str = "LOCK";

    /// Acquire the lock, creating `data_dir` if needed.
    ///
    /// # Errors
    ///
    /// `LockError::AlreadyLocked` if another process holds it.
    pub fn acquire(data_dir: &Path) -> Result<Self, LockError> {
        let path = data_dir.join(Self::LOCK_FILE);
        let create_failed = |source| LockError::CreateFailed {
            path: path.clone(),
            source,
        };

        std::fs::create_dir_all(data_dir).map_err(create_failed)?;
        let mut file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&path)
            .map_err(create_failed)?;

        if file.try_lock_exclusive().is_err() {
            let pid = Self::read_pid(&mut file);
            warn!(path = %path.display(), ?pid, "[runtime] Data directory is locked");
            return Err(LockError::AlreadyLocked { pid, path });
        }

        // Only the holder rewrites the PID.
        file.set_len(0).map_err(LockError::WriteFailed)?;
        writeln!(file, "{}", std::process::id()).map_err(LockError::WriteFailed)?;
        file.sync_all().map_err(LockError::WriteFailed)?;

        debug!(path = %path.display(), "[runtime] Data directory locked");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_pid(file: &mut File) -> Option<u32> {
        let mut contents = String::new();
        file.read_to_string(&mut contents).ok()?;
        contents.trim().parse().ok()
    }
}

impl Drop for DataDirLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            warn!(path = %self.path.display(), "[runtime] Failed to release data directory lock: {}", e);
        }
    }
}
