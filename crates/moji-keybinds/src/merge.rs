//! Reconciliation of desired bindings against the persisted registry
//!
//! The merge is append-only by default: existing entries keep their relative
//! order and content, desired bindings already present are skipped, and the
//! rest are appended at the end. Applying the same desired set twice is a
//! no-op.

use std::collections::HashSet;

use crate::models::{BindingIdentity, CommandBinding, RegistryEntry};

/// Knobs for a reconciliation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconcileOptions {
    /// Remove entries owned by this store's guard that are no longer in the
    /// desired set. Entries under any other guard, or with no guard, are
    /// never candidates. Off by default: the registry is shared state and
    /// stale bindings are left for the user to clean up unless the caller
    /// opts in.
    pub prune_stale: bool,
}

/// Result of reconciling desired bindings against the persisted list.
#[derive(Debug, Clone)]
pub struct ReconcileOutcome {
    /// The full updated list, ready to persist.
    pub entries: Vec<RegistryEntry>,
    /// Identities appended during this run, in input order.
    pub added: Vec<BindingIdentity>,
    /// Identities removed during this run (only with `prune_stale`).
    pub pruned: Vec<BindingIdentity>,
}

impl ReconcileOutcome {
    /// Whether the reconciled list differs from the loaded one.
    pub fn changed(&self) -> bool {
        !self.added.is_empty() || !self.pruned.is_empty()
    }

    /// Human-readable status line for the caller's logging.
    pub fn summary(&self) -> String {
        if !self.changed() {
            return format!("keybindings up to date ({} entries)", self.entries.len());
        }
        let mut parts = Vec::new();
        if !self.added.is_empty() {
            parts.push(format!("added {}", self.added.len()));
        }
        if !self.pruned.is_empty() {
            parts.push(format!("pruned {}", self.pruned.len()));
        }
        format!(
            "keybindings updated: {} ({} entries)",
            parts.join(", "),
            self.entries.len()
        )
    }
}

/// Merge `desired` into `existing` under `guard`.
pub fn reconcile(
    existing: Vec<RegistryEntry>,
    desired: &[CommandBinding],
    guard: &str,
    options: ReconcileOptions,
) -> ReconcileOutcome {
    let desired_ids: Vec<BindingIdentity> = desired
        .iter()
        .map(|binding| BindingIdentity::of_binding(binding, guard))
        .collect();

    let mut pruned = Vec::new();
    let mut entries = if options.prune_stale {
        let keep: HashSet<&BindingIdentity> = desired_ids.iter().collect();
        let mut kept = Vec::with_capacity(existing.len());
        for entry in existing {
            match entry.identity(guard) {
                Some(id) if !keep.contains(&id) => pruned.push(id),
                _ => kept.push(entry),
            }
        }
        kept
    } else {
        existing
    };

    let present: HashSet<BindingIdentity> = entries
        .iter()
        .filter_map(|entry| entry.identity(guard))
        .collect();

    let mut added: Vec<BindingIdentity> = Vec::new();
    for (binding, id) in desired.iter().zip(desired_ids) {
        if present.contains(&id) || added.contains(&id) {
            continue;
        }
        entries.push(RegistryEntry::from_binding(binding, guard));
        added.push(id);
    }

    ReconcileOutcome {
        entries,
        added,
        pruned,
    }
}
