/// Error taxonomy for the scanner core.
///
/// Every fallible operation in this crate returns [`Result`]. The binary
/// decides which failures abort the run; the core only classifies them.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The persisted state file exists but is not valid JSON for a store.
    #[error("state file {} is corrupt: {source}", path.display())]
    StateCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The state file could not be read, written, or moved into place.
    #[error("state file {} could not be accessed: {source}", path.display())]
    StateIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory entry could not be listed or stat'ed during discovery or a walk.
    #[error("cannot access {}: {source}", path.display())]
    FilesystemAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FilesystemAccess {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn state_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::StateIo {
            path: path.into(),
            source,
        }
    }

    /// `true` for errors that belong to a single sector's walk and can be
    /// isolated without aborting the whole run.
    pub fn is_filesystem_access(&self) -> bool {
        matches!(self, Self::FilesystemAccess { .. })
    }
}
