//! Atomic registry file persistence

use std::io::Write;
use std::path::Path;

use crate::error::RegistryError;
use crate::models::RegistryEntry;

/// Serialize `entries` and replace the file at `path` with the result.
///
/// The full list is written pretty-printed, comment-free, with a trailing
/// newline. The new content lands in a temporary file in the target
/// directory and is renamed over the registry, so a crash mid-write never
/// leaves a truncated file behind. Failures propagate as
/// [`RegistryError::WriteFailed`]; there are no retries.
pub fn persist_registry(path: &Path, entries: &[RegistryEntry]) -> Result<(), RegistryError> {
    let write_failed = |source: std::io::Error| RegistryError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut json = serde_json::to_string_pretty(entries).map_err(|e| write_failed(e.into()))?;
    json.push('\n');

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_failed)?;
    tmp.write_all(json.as_bytes()).map_err(write_failed)?;
    tmp.persist(path).map_err(|e| write_failed(e.error))?;

    Ok(())
}
