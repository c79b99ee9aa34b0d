use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while processing a single file. The run records it and moves on.
#[derive(Debug, Error)]
pub enum FixError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FixError {
    pub fn path(&self) -> &PathBuf {
        match self {
            FixError::Read { path, .. } | FixError::Write { path, .. } => path,
        }
    }
}
