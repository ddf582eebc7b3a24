//! Exclusive write access to a store.

use std::path::PathBuf;
use tokio::sync::OwnedMutexGuard;
use tracing::warn;

/// Name of the lock file a [`super::FileStore`] creates in its folder while writing.
pub const LOCK_FILE: &str = ".lock";

/// Held by a writer between its numbering check and its write. Released on drop.
#[derive(Debug)]
pub struct WriteGuard {
    hold: Hold,
}

#[derive(Debug)]
enum Hold {
    Memory { _guard: OwnedMutexGuard<()> },
    File(PathBuf),
}

impl WriteGuard {
    pub(super) fn memory(guard: OwnedMutexGuard<()>) -> Self {
        Self {
            hold: Hold::Memory { _guard: guard },
        }
    }

    pub(super) fn file(lock_path: PathBuf) -> Self {
        Self {
            hold: Hold::File(lock_path),
        }
    }
}

impl Drop for WriteGuard {
    fn drop(&mut self) {
        if let Hold::File(lock_path) = &self.hold {
            if let Err(e) = std::fs::remove_file(lock_path) {
                warn!(path = %lock_path.display(), error = %e, "Failed to release store lock");
            }
        }
    }
}
