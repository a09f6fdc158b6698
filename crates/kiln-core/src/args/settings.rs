//! Persisted-settings layer for the argument store.
//!
//! Settings are the lowest-priority argument source: a flat name/value map
//! kept beside the project. Lookups read through to the backing store on
//! every call, so external edits are visible immediately.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// Read-through source of persisted name/value settings.
pub trait SettingsProvider: Send + Sync {
    /// Look up `name`, case-insensitively. `None` when the setting does not
    /// exist (or the backing store cannot be read).
    fn get(&self, name: &str) -> Option<String>;
}

/// Settings persisted as a flat JSON object, e.g.
///
/// ```json
/// { "configuration": "Release", "target": "Default" }
/// ```
///
/// The file is re-read on every lookup. A missing or malformed file reads
/// as an empty layer.
#[derive(Debug, Clone)]
pub struct JsonSettings {
    path: PathBuf,
}

impl JsonSettings {
    /// Conventional settings file name, looked up in the current directory.
    pub const DEFAULT_FILE: &'static str = "kiln.settings.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonSettings { path: path.into() }
    }

    pub fn default_location() -> Self {
        JsonSettings::new(Self::DEFAULT_FILE)
    }
}

/// The on-disk shape: one flat JSON object of string values.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct SettingsFile(HashMap<String, String>);

impl SettingsProvider for JsonSettings {
    fn get(&self, name: &str) -> Option<String> {
        let text = fs::read_to_string(&self.path).ok()?;
        let SettingsFile(values) = serde_json::from_str(&text).ok()?;
        values
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    }
}

/// In-memory settings, for tests and embedders that manage persistence
/// themselves.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }
}

impl SettingsProvider for MemorySettings {
    fn get(&self, name: &str) -> Option<String> {
        self.values
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    }
}
