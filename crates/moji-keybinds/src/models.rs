//! Core data models for the keybinding registry

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Command identifier the host editor uses for "run several commands in
/// sequence" composite bindings.
pub const RUN_COMMANDS: &str = "runCommands";

/// A binding the caller wants active, independent of what is persisted.
///
/// `key` and `action` together form the identity used for deduplication;
/// `title` is a cosmetic label and never participates in matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandBinding {
    pub key: String,
    #[serde(default)]
    pub title: String,
    pub action: String,
}

impl CommandBinding {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        CommandBinding {
            key: key.into(),
            title: title.into(),
            action: action.into(),
        }
    }
}

/// One persisted record in the registry file.
///
/// The registry also holds entries from other tools and from the user's own
/// hand-edits. Fields this subsystem does not interpret are captured in
/// `extra` and written back verbatim, so a rewrite never drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub key: String,
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RegistryEntry {
    /// Build the entry that represents `binding` scoped to `guard`.
    pub fn from_binding(binding: &CommandBinding, guard: &str) -> Self {
        RegistryEntry {
            key: binding.key.clone(),
            command: binding.action.clone(),
            when: Some(guard.to_string()),
            args: None,
            extra: Map::new(),
        }
    }

    /// The action this entry ultimately triggers.
    ///
    /// For composite [`RUN_COMMANDS`] entries this is the first sub-command,
    /// in either its string or `{ "command": ... }` object form. A composite
    /// with no usable sub-command has no primary action.
    pub fn primary_action(&self) -> Option<&str> {
        if self.command != RUN_COMMANDS {
            return Some(&self.command);
        }
        let commands = self.args.as_ref()?.get("commands")?.as_array()?;
        match commands.first()? {
            Value::String(command) => Some(command),
            Value::Object(descriptor) => descriptor.get("command")?.as_str(),
            _ => None,
        }
    }

    /// Canonical identity of this entry under `guard`, if it is owned by it.
    ///
    /// Entries with no `when` clause, a different guard, or no extractable
    /// primary action have no identity and never match a desired binding.
    pub fn identity(&self, guard: &str) -> Option<BindingIdentity> {
        if self.when.as_deref() != Some(guard) {
            return None;
        }
        let action = self.primary_action()?;
        Some(BindingIdentity {
            guard: guard.to_string(),
            key: self.key.clone(),
            action: action.to_string(),
        })
    }
}

/// The canonical identity of a binding: scoping guard + trigger + action.
///
/// All matching between desired bindings and persisted entries goes through
/// this type rather than ad-hoc field comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BindingIdentity {
    pub guard: String,
    pub key: String,
    pub action: String,
}

impl BindingIdentity {
    pub fn of_binding(binding: &CommandBinding, guard: &str) -> Self {
        BindingIdentity {
            guard: guard.to_string(),
            key: binding.key.clone(),
            action: binding.action.clone(),
        }
    }
}

impl fmt::Display for BindingIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.key, self.action)
    }
}
