//! Diagnostics: templated messages, color palettes, and the build log.

pub mod console;
pub mod formatting;
pub mod log;
mod palette;
mod value;

pub use console::{AnsiConsole, Console, ConsoleEvent, MemoryConsole};
pub use formatting::{parse, FormatError, FormatToken, RenderError};
pub use log::{BuildLog, LogError};
pub use palette::Palette;
pub use value::LogValue;
