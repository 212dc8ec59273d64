//! Error types for registry operations

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or persisting the keybinding registry.
///
/// Every failure is surfaced once to the caller; no retries happen inside
/// this crate. A `Malformed` registry is never written back, so a parse
/// failure cannot destroy the user's file.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read keybinding registry at {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed keybinding registry at {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("failed to write keybinding registry at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
