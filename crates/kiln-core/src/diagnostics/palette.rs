//! Severity color palettes.

use console::Color;

use crate::verbosity::LogLevel;

/// Color pairs for one severity: one pair for literal text, a distinct
/// pair for rendered positional arguments. A `None` background keeps the
/// terminal's own background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Option<Color>,
    pub foreground: Color,
    pub argument_background: Option<Color>,
    pub argument_foreground: Color,
}

impl Palette {
    /// Fixed palette table. Errors get a high-contrast red pair; warnings
    /// keep the terminal background under yellow text; information
    /// highlights arguments on a blue background; verbose and debug writes
    /// step down through grays.
    pub fn for_level(level: LogLevel) -> Palette {
        match level {
            LogLevel::Error => Palette {
                background: Some(Color::Red),
                foreground: Color::White,
                argument_background: Some(Color::Color256(9)),
                argument_foreground: Color::White,
            },
            LogLevel::Warning => Palette {
                background: None,
                foreground: Color::Yellow,
                argument_background: None,
                argument_foreground: Color::Yellow,
            },
            LogLevel::Information => Palette {
                background: None,
                foreground: Color::White,
                argument_background: Some(Color::Blue),
                argument_foreground: Color::White,
            },
            LogLevel::Verbose => Palette {
                background: None,
                foreground: Color::Color256(250),
                argument_background: None,
                argument_foreground: Color::White,
            },
            LogLevel::Debug => Palette {
                background: None,
                foreground: Color::Color256(242),
                argument_background: None,
                argument_foreground: Color::Color256(250),
            },
        }
    }

    /// Color pair for literal tokens.
    pub fn literal_colors(&self) -> (Option<Color>, Color) {
        (self.background, self.foreground)
    }

    /// Color pair for positional tokens.
    pub fn argument_colors(&self) -> (Option<Color>, Color) {
        (self.argument_background, self.argument_foreground)
    }
}
