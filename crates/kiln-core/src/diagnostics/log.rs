//! The verbosity-aware build log.
//!
//! Every formatted line the tool prints flows through [`BuildLog::write`]:
//! filter by verbosity, pick the severity's palette, then color and write
//! the template token by token. Writes are serialized so concurrent task
//! workers can never interleave their color-state mutations.

use parking_lot::Mutex;
use thiserror::Error;

use super::console::Console;
use super::formatting::{self, FormatError, FormatToken, RenderError};
use super::palette::Palette;
use super::value::LogValue;
use crate::verbosity::{LogLevel, Verbosity};

/// Raised when a template cannot be parsed or rendered. These are not
/// recovered; they propagate to the caller of the write.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LogError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Color-coded, verbosity-filtered log over a [`Console`].
///
/// One instance serves a whole run. The console and the active verbosity
/// live behind a single mutex, so a verbosity read can never tear against a
/// concurrent write.
pub struct BuildLog {
    inner: Mutex<Inner>,
}

struct Inner {
    console: Box<dyn Console>,
    verbosity: Verbosity,
}

impl BuildLog {
    pub fn new(console: Box<dyn Console>, verbosity: Verbosity) -> Self {
        BuildLog {
            inner: Mutex::new(Inner { console, verbosity }),
        }
    }

    /// Change the threshold for subsequent writes. Writes already emitted
    /// are unaffected.
    pub fn set_verbosity(&self, verbosity: Verbosity) {
        self.inner.lock().verbosity = verbosity;
    }

    /// The currently active threshold.
    pub fn verbosity(&self) -> Verbosity {
        self.inner.lock().verbosity
    }

    /// Write one formatted line at the given message level and severity.
    ///
    /// When `verbosity` exceeds the active threshold nothing happens at all,
    /// not even color changes. Otherwise the whole sequence - palette
    /// selection, per-token coloring, reset, line terminator - runs as one
    /// critical section, and the color reset plus line terminator happen on
    /// every exit path, including a failed render.
    pub fn write(
        &self,
        verbosity: Verbosity,
        level: LogLevel,
        template: &str,
        args: &[LogValue],
    ) -> Result<(), LogError> {
        let mut inner = self.inner.lock();
        if verbosity > inner.verbosity {
            return Ok(());
        }

        let palette = Palette::for_level(level);
        let result = write_tokens(inner.console.as_mut(), &palette, template, args);
        inner.console.reset_colors();
        inner.console.write_line();
        result
    }

    /// Error-severity write, visible at every threshold.
    pub fn error(&self, template: &str, args: &[LogValue]) -> Result<(), LogError> {
        self.write(LogLevel::Error.implicit_verbosity(), LogLevel::Error, template, args)
    }

    pub fn warning(&self, template: &str, args: &[LogValue]) -> Result<(), LogError> {
        self.write(
            LogLevel::Warning.implicit_verbosity(),
            LogLevel::Warning,
            template,
            args,
        )
    }

    pub fn information(&self, template: &str, args: &[LogValue]) -> Result<(), LogError> {
        self.write(
            LogLevel::Information.implicit_verbosity(),
            LogLevel::Information,
            template,
            args,
        )
    }

    pub fn verbose(&self, template: &str, args: &[LogValue]) -> Result<(), LogError> {
        self.write(
            LogLevel::Verbose.implicit_verbosity(),
            LogLevel::Verbose,
            template,
            args,
        )
    }

    pub fn debug(&self, template: &str, args: &[LogValue]) -> Result<(), LogError> {
        self.write(LogLevel::Debug.implicit_verbosity(), LogLevel::Debug, template, args)
    }
}

fn write_tokens(
    console: &mut dyn Console,
    palette: &Palette,
    template: &str,
    args: &[LogValue],
) -> Result<(), LogError> {
    for token in formatting::parse(template) {
        let token = token?;
        let (background, foreground) = match &token {
            FormatToken::Positional { .. } => palette.argument_colors(),
            FormatToken::Literal(_) => palette.literal_colors(),
        };
        console.set_colors(background, foreground);
        console.write(&token.render(args)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::console::{ConsoleEvent, MemoryConsole};
    use crate::log_args;

    fn log_over(verbosity: Verbosity) -> (BuildLog, MemoryConsole) {
        let console = MemoryConsole::new();
        let log = BuildLog::new(Box::new(console.clone()), verbosity);
        (log, console)
    }

    #[test]
    fn test_filtered_write_has_no_side_effects() {
        let (log, console) = log_over(Verbosity::Minimal);
        log.verbose("should not appear: {0}", log_args!["x"]).unwrap();
        assert!(console.events().is_empty());
    }

    #[test]
    fn test_filtered_write_skips_template_parsing() {
        // A malformed template at a filtered level is never even parsed.
        let (log, console) = log_over(Verbosity::Quiet);
        assert_eq!(log.debug("{broken", log_args![]), Ok(()));
        assert!(console.events().is_empty());
    }

    #[test]
    fn test_tokens_use_literal_and_argument_colors() {
        let (log, console) = log_over(Verbosity::Normal);
        log.information("building {0} now", log_args!["demo"]).unwrap();

        let palette = Palette::for_level(LogLevel::Information);
        let (literal_bg, literal_fg) = palette.literal_colors();
        let (argument_bg, argument_fg) = palette.argument_colors();

        assert_eq!(
            console.events(),
            vec![
                ConsoleEvent::SetColors {
                    background: literal_bg,
                    foreground: literal_fg
                },
                ConsoleEvent::Write("building ".to_string()),
                ConsoleEvent::SetColors {
                    background: argument_bg,
                    foreground: argument_fg
                },
                ConsoleEvent::Write("demo".to_string()),
                ConsoleEvent::SetColors {
                    background: literal_bg,
                    foreground: literal_fg
                },
                ConsoleEvent::Write(" now".to_string()),
                ConsoleEvent::ResetColors,
                ConsoleEvent::NewLine,
            ]
        );
    }

    #[test]
    fn test_error_palette_selected_for_error_severity() {
        let (log, console) = log_over(Verbosity::Quiet);
        log.error("boom", log_args![]).unwrap();

        let (background, foreground) = Palette::for_level(LogLevel::Error).literal_colors();
        assert_eq!(
            console.events().first(),
            Some(&ConsoleEvent::SetColors {
                background,
                foreground
            })
        );
    }

    #[test]
    fn test_reset_and_newline_follow_a_failed_render() {
        let (log, console) = log_over(Verbosity::Normal);
        let err = log.information("value: {3}", log_args!["only one"]).unwrap_err();
        assert_eq!(
            err,
            LogError::Render(RenderError::PositionOutOfRange {
                position: 3,
                supplied: 1
            })
        );

        // Cleanup ran even though the write failed part-way.
        let events = console.events();
        assert_eq!(
            &events[events.len() - 2..],
            &[ConsoleEvent::ResetColors, ConsoleEvent::NewLine]
        );
    }

    #[test]
    fn test_set_verbosity_applies_to_subsequent_writes_only() {
        let (log, console) = log_over(Verbosity::Quiet);
        log.information("hidden", log_args![]).unwrap();
        assert!(console.events().is_empty());

        log.set_verbosity(Verbosity::Normal);
        log.information("visible", log_args![]).unwrap();
        assert_eq!(console.output(), "visible\n");
    }

    #[test]
    fn test_concurrent_writes_never_interleave() {
        use std::sync::Arc;

        let console = MemoryConsole::new();
        let log = Arc::new(BuildLog::new(Box::new(console.clone()), Verbosity::Normal));

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let log = Arc::clone(&log);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        log.information("worker {0} line", log_args![worker as i64]).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Every line must be a complete set-write...reset-newline sequence;
        // interleaving would break the trailing pair.
        let events = console.events();
        let mut index = 0;
        while index < events.len() {
            let line_end = events[index..]
                .iter()
                .position(|e| *e == ConsoleEvent::NewLine)
                .map(|offset| index + offset)
                .expect("unterminated line");
            assert_eq!(events[line_end - 1], ConsoleEvent::ResetColors);
            index = line_end + 1;
        }
    }
}
