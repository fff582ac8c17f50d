// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in Jot return `error::Result<T>`.  No panics in
// production paths; errors surface as user-facing notifications (see
// `FileDialog::alert` and the dispatch loop in `shell`).
//
// Dialog cancellation is deliberately *not* represented here: dialogs return
// `Option<PathBuf>` and a cancelled prompt aborts only the operation that
// issued it, with no state change.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Every error that Jot can produce.
#[derive(Debug, Error)]
pub enum JotError {
    /// The file at `path` could not be read (missing, unreadable, or not
    /// decodable as UTF-8 text).
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file at `path` could not be written (permissions, disk full,
    /// invalid path).
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl JotError {
    /// The path the failing operation was addressed to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, JotError>;

// ── Tests ─────────────────────────────────────────────────────────────────────
