//! The layered argument store.
//!
//! Named values resolve against up to three ranked layers: command-line
//! bindings, process environment variables, and persisted settings, in that
//! fixed priority order. Layers can be disabled wholesale through
//! [`ArgumentSources`]; a disabled layer is skipped entirely, not merely
//! deprioritized. All name comparisons are case-insensitive.
//!
//! The command-line layer is populated once during invocation parsing and
//! is immutable afterward; the environment and settings layers are read
//! through to their external stores on every lookup.

use std::collections::HashMap;

use bitflags::bitflags;
use thiserror::Error;

use super::settings::{JsonSettings, SettingsProvider};

bitflags! {
    /// Which argument layers are consulted.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ArgumentSources: u8 {
        const COMMAND_LINE = 1;
        const ENVIRONMENT = 1 << 1;
        const SETTINGS = 1 << 2;
    }
}

impl Default for ArgumentSources {
    fn default() -> Self {
        ArgumentSources::all()
    }
}

/// Raised when binding a command-line argument fails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArgumentError {
    /// The name is already bound in the command-line layer, which is
    /// write-once for the lifetime of the store.
    #[error("multiple arguments with the same name ({0})")]
    DuplicateArgument(String),
}

/// Ranked lookup over command line, environment, and persisted settings.
pub struct ArgumentStore {
    /// Command-line layer, keyed by lowercased name.
    values: HashMap<String, String>,
    sources: ArgumentSources,
    settings: Box<dyn SettingsProvider>,
}

impl std::fmt::Debug for ArgumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentStore")
            .field("values", &self.values)
            .field("sources", &self.sources)
            .finish_non_exhaustive()
    }
}

impl ArgumentStore {
    /// Store with the conventional JSON settings file as its persisted
    /// layer.
    pub fn new(sources: ArgumentSources) -> Self {
        ArgumentStore::with_settings(sources, Box::new(JsonSettings::default_location()))
    }

    /// Store with a caller-supplied persisted layer.
    pub fn with_settings(sources: ArgumentSources, settings: Box<dyn SettingsProvider>) -> Self {
        ArgumentStore {
            values: HashMap::new(),
            sources,
            settings,
        }
    }

    pub fn sources(&self) -> ArgumentSources {
        self.sources
    }

    pub fn set_sources(&mut self, sources: ArgumentSources) {
        self.sources = sources;
    }

    /// Bind `name` in the command-line layer. Fails if the name is already
    /// bound there; bindings are immutable once made.
    pub fn set_argument(&mut self, name: &str, value: &str) -> Result<(), ArgumentError> {
        let key = name.to_ascii_lowercase();
        if self.values.contains_key(&key) {
            return Err(ArgumentError::DuplicateArgument(name.to_string()));
        }
        self.values.insert(key, value.to_string());
        Ok(())
    }

    /// Replace the command-line layer wholesale. Used by embedders that
    /// collect bindings up front; invocation parsing binds one at a time.
    pub fn set_arguments(&mut self, arguments: HashMap<String, String>) {
        self.values = arguments
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();
    }

    /// Whether `name` resolves in any enabled layer.
    pub fn has_argument(&self, name: &str) -> bool {
        self.get_argument(name).is_some()
    }

    /// First match scanning enabled layers in priority order.
    pub fn get_argument(&self, name: &str) -> Option<String> {
        if self.sources.contains(ArgumentSources::COMMAND_LINE) {
            if let Some(value) = self.values.get(&name.to_ascii_lowercase()) {
                return Some(value.clone());
            }
        }
        if self.sources.contains(ArgumentSources::ENVIRONMENT) {
            if let Some(value) = environment_lookup(name) {
                return Some(value);
            }
        }
        if self.sources.contains(ArgumentSources::SETTINGS) {
            if let Some(value) = self.settings.get(name) {
                return Some(value);
            }
        }
        None
    }

    /// Like [`get_argument`](Self::get_argument), falling back to `default`
    /// when no enabled layer has the name.
    pub fn get_argument_or(&self, name: &str, default: &str) -> String {
        self.get_argument(name)
            .unwrap_or_else(|| default.to_string())
    }
}

/// Case-insensitive environment lookup, read through on every call.
fn environment_lookup(name: &str) -> Option<String> {
    std::env::vars()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}
