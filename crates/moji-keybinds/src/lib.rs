//! Keybinding registry merge and persistence for the moji cockpit panel
//!
//! The moji extension displays a decorative cockpit panel and wires a set of
//! custom command shortcuts into the host editor. Panel rendering and command
//! registration stay in the host-specific glue; this crate is the
//! host-independent core behind it:
//! - Per-OS resolution of the editor's `keybindings.json` location
//! - Comment-tolerant parsing of the registry file
//! - Non-destructive, idempotent reconciliation of desired bindings against
//!   existing entries
//! - Atomic persistence of the merged list

pub mod error;
pub mod merge;
pub mod models;
pub mod parser;
pub mod paths;
pub mod persistence;
pub mod store;

// Re-export public types
pub use error::RegistryError;
pub use merge::{reconcile, ReconcileOptions, ReconcileOutcome};
pub use models::{BindingIdentity, CommandBinding, RegistryEntry, RUN_COMMANDS};
pub use parser::{load_registry, parse_registry};
pub use paths::{registry_path, Env, Platform};
pub use persistence::persist_registry;
pub use store::{KeybindingStore, SyncReport, PANEL_GUARD};
