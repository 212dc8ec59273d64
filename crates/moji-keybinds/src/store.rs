//! The keybinding store façade

use std::path::{Path, PathBuf};

use crate::error::RegistryError;
use crate::merge::{reconcile, ReconcileOptions};
use crate::models::CommandBinding;
use crate::parser::load_registry;
use crate::paths::{registry_path, Env, Platform};
use crate::persistence::persist_registry;

/// Guard limiting moji's bindings to when the cockpit panel has focus.
pub const PANEL_GUARD: &str = "activeWebviewPanelId == 'moji'";

/// Locates, loads, reconciles and persists the host editor's keybinding
/// registry on behalf of the cockpit panel.
///
/// The store is invoked synchronously, once per activation; load, reconcile
/// and persist run to completion or fail outright. No locking is taken
/// against the registry file, so a concurrent external writer races with us
/// last-writer-wins.
pub struct KeybindingStore {
    path: PathBuf,
    guard: String,
    options: ReconcileOptions,
}

/// Outcome of a [`KeybindingStore::sync`] run.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub added: usize,
    pub pruned: usize,
    pub total: usize,
    /// Status line for the caller's user-visible reporting.
    pub message: String,
}

impl KeybindingStore {
    /// Create a store against the current platform's registry location.
    pub fn new(guard: impl Into<String>) -> Self {
        let path = registry_path(Platform::current(), &Env::capture());
        Self::with_path(path, guard)
    }

    /// Create a store against an explicit registry file.
    pub fn with_path(path: impl Into<PathBuf>, guard: impl Into<String>) -> Self {
        KeybindingStore {
            path: path.into(),
            guard: guard.into(),
            options: ReconcileOptions::default(),
        }
    }

    /// Enable or disable pruning of stale entries owned by this store's
    /// guard. Off by default.
    pub fn prune_stale(mut self, enabled: bool) -> Self {
        self.options.prune_stale = enabled;
        self
    }

    /// The registry file this store operates on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The scoping guard new entries are written with.
    pub fn guard(&self) -> &str {
        &self.guard
    }

    /// Bring the registry in line with `desired`: load, reconcile, persist.
    ///
    /// A failed load or parse leaves the file untouched; a failed persist
    /// loses only the in-memory reconciled list, forcing a re-run on the
    /// next activation. Every failure surfaces once to the caller.
    pub fn sync(&self, desired: &[CommandBinding]) -> Result<SyncReport, RegistryError> {
        tracing::debug!(
            path = %self.path.display(),
            desired = desired.len(),
            "loading keybinding registry"
        );
        let existing = load_registry(&self.path)?;

        let outcome = reconcile(existing, desired, &self.guard, self.options);
        for id in &outcome.added {
            tracing::info!(key = %id.key, action = %id.action, "registered keybinding");
        }
        for id in &outcome.pruned {
            tracing::info!(key = %id.key, action = %id.action, "pruned stale keybinding");
        }

        persist_registry(&self.path, &outcome.entries)?;
        tracing::debug!(
            path = %self.path.display(),
            entries = outcome.entries.len(),
            "persisted keybinding registry"
        );

        Ok(SyncReport {
            added: outcome.added.len(),
            pruned: outcome.pruned.len(),
            total: outcome.entries.len(),
            message: outcome.summary(),
        })
    }
}
