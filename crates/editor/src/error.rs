//! Session error taxonomy.
//!
//! Only file I/O can fail in a way the user must hear about; both read and
//! write failures are caught at the call site, surfaced through the error
//! report channel, and leave the session state untouched. Nothing here is
//! ever fatal to the process.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the user by session file operations.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EditorError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
