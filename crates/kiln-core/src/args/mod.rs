//! Layered, case-insensitive argument resolution.

mod settings;
mod store;

pub use settings::{JsonSettings, MemorySettings, SettingsProvider};
pub use store::{ArgumentError, ArgumentSources, ArgumentStore};
