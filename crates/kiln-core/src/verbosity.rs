//! Output verbosity and log severity enumerations.
//!
//! `Verbosity` is the threshold a build run operates at; `LogLevel` is the
//! severity of a single write. Every severity carries an implicit verbosity
//! rank, so a write is emitted only when its rank fits under the active
//! threshold.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Amount of output a build run produces, from least to most.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verbosity {
    /// Only errors.
    Quiet,
    /// Errors and warnings.
    Minimal,
    /// Errors, warnings, and informational messages.
    #[default]
    Normal,
    /// Everything except debug output.
    Verbose,
    /// Everything, including debug output and full error traces.
    Diagnostic,
}

impl Verbosity {
    /// Canonical names, in rank order. Used by help text and error messages.
    pub const NAMES: [&'static str; 5] = ["Quiet", "Minimal", "Normal", "Verbose", "Diagnostic"];

    fn name(self) -> &'static str {
        match self {
            Verbosity::Quiet => "Quiet",
            Verbosity::Minimal => "Minimal",
            Verbosity::Normal => "Normal",
            Verbosity::Verbose => "Verbose",
            Verbosity::Diagnostic => "Diagnostic",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when a string does not name a verbosity level.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized verbosity level '{0}' (expected one of: Quiet, Minimal, Normal, Verbose, Diagnostic)")]
pub struct ParseVerbosityError(pub String);

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    /// Closed, case-insensitive conversion table.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.to_ascii_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "minimal" => Verbosity::Minimal,
            "normal" => Verbosity::Normal,
            "verbose" => Verbosity::Verbose,
            "diagnostic" => Verbosity::Diagnostic,
            _ => return Err(ParseVerbosityError(s.to_string())),
        };
        Ok(level)
    }
}

/// Severity of a single log write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Error,
    Warning,
    Information,
    Verbose,
    Debug,
}

impl LogLevel {
    /// The verbosity threshold at which writes of this severity start to
    /// appear. Errors survive even `Quiet`; debug output needs `Diagnostic`.
    pub fn implicit_verbosity(self) -> Verbosity {
        match self {
            LogLevel::Error => Verbosity::Quiet,
            LogLevel::Warning => Verbosity::Minimal,
            LogLevel::Information => Verbosity::Normal,
            LogLevel::Verbose => Verbosity::Verbose,
            LogLevel::Debug => Verbosity::Diagnostic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_ordering() {
        assert!(Verbosity::Quiet < Verbosity::Minimal);
        assert!(Verbosity::Minimal < Verbosity::Normal);
        assert!(Verbosity::Normal < Verbosity::Verbose);
        assert!(Verbosity::Verbose < Verbosity::Diagnostic);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("quiet".parse::<Verbosity>(), Ok(Verbosity::Quiet));
        assert_eq!("QUIET".parse::<Verbosity>(), Ok(Verbosity::Quiet));
        assert_eq!("Diagnostic".parse::<Verbosity>(), Ok(Verbosity::Diagnostic));
        assert_eq!("vErBoSe".parse::<Verbosity>(), Ok(Verbosity::Verbose));
    }

    #[test]
    fn test_parse_rejects_unknown_levels() {
        let err = "chatty".parse::<Verbosity>().unwrap_err();
        assert_eq!(err, ParseVerbosityError("chatty".to_string()));
        assert!("".parse::<Verbosity>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for name in Verbosity::NAMES {
            let level: Verbosity = name.parse().unwrap();
            assert_eq!(level.to_string(), name);
        }
    }

    #[test]
    fn test_implicit_verbosity_mapping() {
        assert_eq!(LogLevel::Error.implicit_verbosity(), Verbosity::Quiet);
        assert_eq!(LogLevel::Warning.implicit_verbosity(), Verbosity::Minimal);
        assert_eq!(LogLevel::Information.implicit_verbosity(), Verbosity::Normal);
        assert_eq!(LogLevel::Verbose.implicit_verbosity(), Verbosity::Verbose);
        assert_eq!(LogLevel::Debug.implicit_verbosity(), Verbosity::Diagnostic);
    }
}
