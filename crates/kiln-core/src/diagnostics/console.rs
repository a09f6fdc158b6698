//! Console seam for color-coded output.
//!
//! The build log drives a [`Console`] implementation token by token: set the
//! colors, write the text, reset at the end of the line. [`AnsiConsole`]
//! renders to the real terminal through the `console` crate (which drops the
//! ANSI codes itself when output is piped); [`MemoryConsole`] records every
//! operation so tests can assert on palette selection and write order.

use std::sync::Arc;

use console::{Color, Style, Term};
use parking_lot::Mutex;

/// Sink for color-coded console writes.
pub trait Console: Send {
    /// Set the colors used by subsequent writes. A `None` background keeps
    /// the terminal's own background.
    fn set_colors(&mut self, background: Option<Color>, foreground: Color);

    /// Return to the terminal's default colors.
    fn reset_colors(&mut self);

    /// Write `text` in the current colors, without a line terminator.
    fn write(&mut self, text: &str);

    /// Emit a line terminator.
    fn write_line(&mut self);
}

/// Console backed by the process's standard output.
pub struct AnsiConsole {
    term: Term,
    colors: Option<(Option<Color>, Color)>,
}

impl AnsiConsole {
    pub fn stdout() -> Self {
        AnsiConsole {
            term: Term::stdout(),
            colors: None,
        }
    }
}

impl Console for AnsiConsole {
    fn set_colors(&mut self, background: Option<Color>, foreground: Color) {
        self.colors = Some((background, foreground));
    }

    fn reset_colors(&mut self) {
        self.colors = None;
    }

    fn write(&mut self, text: &str) {
        let styled = match self.colors {
            Some((background, foreground)) => {
                let mut style = Style::new().fg(foreground);
                if let Some(background) = background {
                    style = style.bg(background);
                }
                style.apply_to(text).to_string()
            }
            None => text.to_string(),
        };
        // Console writes are best-effort; a closed stdout is not a build
        // failure.
        let _ = self.term.write_str(&styled);
    }

    fn write_line(&mut self) {
        let _ = self.term.write_str("\n");
    }
}

/// One recorded console operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    SetColors {
        background: Option<Color>,
        foreground: Color,
    },
    ResetColors,
    Write(String),
    NewLine,
}

/// Console that records operations instead of printing them. Cloning shares
/// the underlying event buffer, so a clone handed to a log stays observable.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    events: Arc<Mutex<Vec<ConsoleEvent>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every operation recorded so far.
    pub fn events(&self) -> Vec<ConsoleEvent> {
        self.events.lock().clone()
    }

    /// The text written so far, with line terminators, ignoring color
    /// operations.
    pub fn output(&self) -> String {
        self.events
            .lock()
            .iter()
            .map(|event| match event {
                ConsoleEvent::Write(text) => text.as_str(),
                ConsoleEvent::NewLine => "\n",
                _ => "",
            })
            .collect()
    }
}

impl Console for MemoryConsole {
    fn set_colors(&mut self, background: Option<Color>, foreground: Color) {
        self.events.lock().push(ConsoleEvent::SetColors {
            background,
            foreground,
        });
    }

    fn reset_colors(&mut self) {
        self.events.lock().push(ConsoleEvent::ResetColors);
    }

    fn write(&mut self, text: &str) {
        self.events.lock().push(ConsoleEvent::Write(text.to_string()));
    }

    fn write_line(&mut self) {
        self.events.lock().push(ConsoleEvent::NewLine);
    }
}
