//! Argument values for templated log messages.
//!
//! A positional placeholder renders whatever [`LogValue`] sits at its index.
//! Numeric values expose a small closed table of invariant (locale
//! independent) format specifiers; everything else renders through its
//! default string form. An absent value renders as the literal `[NULL]`.

use std::path::{Path, PathBuf};

/// A value supplied to a templated log write.
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    /// Absent value. Renders as `[NULL]` regardless of any format specifier.
    Null,
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Boolean(bool),
}

impl LogValue {
    /// Render this value, applying `spec` when the value supports custom
    /// formatting. A missing, empty, or whitespace-only specifier falls back
    /// to the default string form, as does a specifier the value's type does
    /// not understand.
    pub fn render(&self, spec: Option<&str>) -> String {
        if let Some(spec) = spec.filter(|s| !s.trim().is_empty()) {
            if let Some(formatted) = self.format_invariant(spec) {
                return formatted;
            }
        }
        self.to_display_string()
    }

    /// Default string conversion.
    fn to_display_string(&self) -> String {
        match self {
            LogValue::Null => "[NULL]".to_string(),
            LogValue::Text(text) => text.clone(),
            LogValue::Integer(value) => value.to_string(),
            LogValue::Unsigned(value) => value.to_string(),
            LogValue::Float(value) => value.to_string(),
            LogValue::Boolean(value) => value.to_string(),
        }
    }

    /// Closed invariant format table. Returns `None` when the value has no
    /// custom formatting capability for the given specifier.
    ///
    /// - `x` / `X`: lower/upper hexadecimal (integers)
    /// - `D<width>`: zero-padded decimal (integers)
    /// - `F<precision>`: fixed-point (floats and integers)
    fn format_invariant(&self, spec: &str) -> Option<String> {
        match self {
            LogValue::Integer(value) => format_integer(*value, spec),
            LogValue::Unsigned(value) => format_unsigned(*value, spec),
            LogValue::Float(value) => format_float(*value, spec),
            _ => None,
        }
    }
}

fn format_integer(value: i64, spec: &str) -> Option<String> {
    match spec {
        "x" => Some(format!("{value:x}")),
        "X" => Some(format!("{value:X}")),
        _ => {
            if let Some(width) = parse_arity(spec, 'D') {
                Some(format!("{value:0width$}"))
            } else {
                parse_arity(spec, 'F').map(|precision| format!("{value:.precision$}", value = value as f64))
            }
        }
    }
}

fn format_unsigned(value: u64, spec: &str) -> Option<String> {
    match spec {
        "x" => Some(format!("{value:x}")),
        "X" => Some(format!("{value:X}")),
        _ => {
            if let Some(width) = parse_arity(spec, 'D') {
                Some(format!("{value:0width$}"))
            } else {
                parse_arity(spec, 'F').map(|precision| format!("{value:.precision$}", value = value as f64))
            }
        }
    }
}

fn format_float(value: f64, spec: &str) -> Option<String> {
    parse_arity(spec, 'F').map(|precision| format!("{value:.precision$}"))
}

/// Parse specifiers of the shape `<letter><digits>` (e.g. `D3`, `F2`),
/// case-insensitively on the letter.
fn parse_arity(spec: &str, letter: char) -> Option<usize> {
    let rest = spec
        .strip_prefix(letter)
        .or_else(|| spec.strip_prefix(letter.to_ascii_lowercase()))?;
    if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}

impl From<&str> for LogValue {
    fn from(value: &str) -> Self {
        LogValue::Text(value.to_string())
    }
}

impl From<String> for LogValue {
    fn from(value: String) -> Self {
        LogValue::Text(value)
    }
}

impl From<&String> for LogValue {
    fn from(value: &String) -> Self {
        LogValue::Text(value.clone())
    }
}

impl From<&Path> for LogValue {
    fn from(value: &Path) -> Self {
        LogValue::Text(value.display().to_string())
    }
}

impl From<PathBuf> for LogValue {
    fn from(value: PathBuf) -> Self {
        LogValue::Text(value.display().to_string())
    }
}

impl From<&PathBuf> for LogValue {
    fn from(value: &PathBuf) -> Self {
        LogValue::Text(value.display().to_string())
    }
}

impl From<i64> for LogValue {
    fn from(value: i64) -> Self {
        LogValue::Integer(value)
    }
}

impl From<i32> for LogValue {
    fn from(value: i32) -> Self {
        LogValue::Integer(value.into())
    }
}

impl From<u64> for LogValue {
    fn from(value: u64) -> Self {
        LogValue::Unsigned(value)
    }
}

impl From<usize> for LogValue {
    fn from(value: usize) -> Self {
        LogValue::Unsigned(value as u64)
    }
}

impl From<f64> for LogValue {
    fn from(value: f64) -> Self {
        LogValue::Float(value)
    }
}

impl From<bool> for LogValue {
    fn from(value: bool) -> Self {
        LogValue::Boolean(value)
    }
}

impl<T: Into<LogValue>> From<Option<T>> for LogValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(LogValue::Null, Into::into)
    }
}

/// Build a `&[LogValue]` slice from heterogeneous arguments.
///
/// ```
/// use kiln_core::log_args;
///
/// let args = log_args!["build.kiln", 3_usize];
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! log_args {
    () => {
        &[] as &[$crate::diagnostics::LogValue]
    };
    ($($value:expr),+ $(,)?) => {
        &[$($crate::diagnostics::LogValue::from($value)),+]
    };
}
