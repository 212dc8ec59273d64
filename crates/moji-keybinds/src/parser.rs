//! Tolerant registry file loading
//!
//! The host editor's keybindings file is JSON with comments, and user-edited
//! files routinely carry trailing commas. Parsing goes through `jsonc-parser`,
//! which understands both as tokens, instead of stripping comments with a
//! text substitution that can misfire inside string values.

use std::fs;
use std::path::Path;

use jsonc_parser::ParseOptions;

use crate::error::RegistryError;
use crate::models::RegistryEntry;

/// Read the registry at `path` into an ordered entry list.
///
/// An absent file is treated as an empty registry and created on the spot, so
/// the store self-initializes on first use. A present but unparseable file
/// fails with [`RegistryError::Malformed`] and nothing is written back — the
/// caller must abort the reconciliation rather than proceed with an empty
/// list.
pub fn load_registry(path: &Path) -> Result<Vec<RegistryEntry>, RegistryError> {
    if !path.exists() {
        initialize_empty(path)?;
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|source| RegistryError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_registry(&content).map_err(|message| RegistryError::Malformed {
        path: path.to_path_buf(),
        message,
    })
}

/// Parse registry text, tolerating comments and trailing commas.
pub fn parse_registry(content: &str) -> Result<Vec<RegistryEntry>, String> {
    let value = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
        .map_err(|e| e.to_string())?;

    let value = match value {
        Some(value) => value,
        // An empty or comment-only file holds no entries.
        None => return Ok(Vec::new()),
    };

    if !value.is_array() {
        return Err("registry root must be an array".to_string());
    }

    serde_json::from_value(value).map_err(|e| e.to_string())
}

fn initialize_empty(path: &Path) -> Result<(), RegistryError> {
    let write_failed = |source: std::io::Error| RegistryError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }
    }
    fs::write(path, "[]\n").map_err(write_failed)
}
