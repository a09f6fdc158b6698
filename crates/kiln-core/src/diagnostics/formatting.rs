//! Composite message template parsing and rendering.
//!
//! A template is literal text interleaved with positional placeholders of
//! the shape `{index[:format]}`. Parsing is lazy: [`parse`] returns an
//! iterator that tokenizes on demand and is a pure function of its input,
//! so the same template can be re-parsed any number of times.
//!
//! Two brace edge cases render literally rather than as placeholders: a `{`
//! at the very end of the input becomes the literal `{`, and `{{` becomes
//! the literal two-character `{{` (it is not collapsed to a single brace).

use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

use super::value::LogValue;

/// One parsed segment of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatToken {
    /// Raw text, rendered unconditionally as itself.
    Literal(String),
    /// A positional placeholder referencing an argument by index.
    Positional {
        position: usize,
        /// Format specifier, when the placeholder carried one. Embedded
        /// colons inside the specifier are dropped during parsing.
        format: Option<String>,
    },
}

/// Raised while tokenizing a malformed template.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The segment before `:` inside a placeholder was not a number.
    #[error("placeholder index '{0}' is not numeric")]
    NonNumericIndex(String),
    /// A `{` opened a placeholder that never reached its closing `}`.
    #[error("unterminated placeholder '{{{0}'")]
    UnterminatedPlaceholder(String),
}

/// Raised while rendering a token against an argument array.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A placeholder referenced an index past the end of the arguments.
    #[error("positional argument {position} is out of range ({supplied} argument(s) supplied)")]
    PositionOutOfRange { position: usize, supplied: usize },
}

impl FormatToken {
    /// Resolve this token against `args`.
    ///
    /// A positional token whose index has no corresponding argument is a
    /// fatal lookup error, never a placeholder string.
    pub fn render(&self, args: &[LogValue]) -> Result<String, RenderError> {
        match self {
            FormatToken::Literal(text) => Ok(text.clone()),
            FormatToken::Positional { position, format } => {
                let value = args.get(*position).ok_or(RenderError::PositionOutOfRange {
                    position: *position,
                    supplied: args.len(),
                })?;
                Ok(value.render(format.as_deref()))
            }
        }
    }
}

/// Tokenize `template` lazily.
pub fn parse(template: &str) -> FormatTokens<'_> {
    FormatTokens {
        chars: template.chars().peekable(),
    }
}

/// Lazy token stream over a template string.
pub struct FormatTokens<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Iterator for FormatTokens<'_> {
    type Item = Result<FormatToken, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        let &first = self.chars.peek()?;
        Some(if first == '{' {
            self.parse_placeholder()
        } else {
            Ok(self.parse_literal())
        })
    }
}

impl FormatTokens<'_> {
    /// Parse a segment starting at `{`.
    fn parse_placeholder(&mut self) -> Result<FormatToken, FormatError> {
        self.chars.next(); // consume the brace
        match self.chars.peek() {
            None => return Ok(FormatToken::Literal("{".to_string())),
            Some('{') => {
                self.chars.next();
                return Ok(FormatToken::Literal("{{".to_string()));
            }
            Some(_) => {}
        }

        let mut body = String::new();
        loop {
            match self.chars.next() {
                None => return Err(FormatError::UnterminatedPlaceholder(body)),
                Some('}') => break,
                Some(c) => body.push(c),
            }
        }

        let (index, format) = match body.split_once(':') {
            // The specifier is everything after the first colon, with any
            // further colons dropped.
            Some((index, rest)) => (index.to_string(), Some(rest.replace(':', ""))),
            None => (body, None),
        };

        if index.is_empty() || !index.chars().all(|c| c.is_ascii_digit()) {
            return Err(FormatError::NonNumericIndex(index));
        }
        let position = index
            .parse()
            .map_err(|_| FormatError::NonNumericIndex(index.clone()))?;

        Ok(FormatToken::Positional { position, format })
    }

    /// Accumulate literal text up to the next `{` or end of input.
    fn parse_literal(&mut self) -> FormatToken {
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            if c == '{' {
                break;
            }
            text.push(c);
            self.chars.next();
        }
        FormatToken::Literal(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_args;

    fn tokens(template: &str) -> Vec<FormatToken> {
        parse(template).collect::<Result<_, _>>().unwrap()
    }

    #[test]
    fn test_plain_text_is_one_literal_token() {
        assert_eq!(
            tokens("no placeholders here"),
            vec![FormatToken::Literal("no placeholders here".to_string())]
        );
    }

    #[test]
    fn test_empty_template_yields_no_tokens() {
        assert_eq!(parse("").count(), 0);
    }

    #[test]
    fn test_positional_between_literals() {
        assert_eq!(
            tokens("building {0} now"),
            vec![
                FormatToken::Literal("building ".to_string()),
                FormatToken::Positional {
                    position: 0,
                    format: None
                },
                FormatToken::Literal(" now".to_string()),
            ]
        );
    }

    #[test]
    fn test_placeholder_with_format_specifier() {
        assert_eq!(
            tokens("{1:D3}"),
            vec![FormatToken::Positional {
                position: 1,
                format: Some("D3".to_string())
            }]
        );
    }

    #[test]
    fn test_embedded_colons_are_dropped_from_specifier() {
        assert_eq!(
            tokens("{0:HH:mm}"),
            vec![FormatToken::Positional {
                position: 0,
                format: Some("HHmm".to_string())
            }]
        );
    }

    #[test]
    fn test_trailing_open_brace_is_literal() {
        assert_eq!(
            tokens("open{"),
            vec![
                FormatToken::Literal("open".to_string()),
                FormatToken::Literal("{".to_string()),
            ]
        );
    }

    #[test]
    fn test_double_brace_stays_doubled() {
        // The escaped brace is preserved verbatim, not collapsed to one.
        assert_eq!(tokens("{{"), vec![FormatToken::Literal("{{".to_string())]);
        let rendered = tokens("{{")
            .iter()
            .map(|t| t.render(log_args![]).unwrap())
            .collect::<String>();
        assert_eq!(rendered, "{{");
    }

    #[test]
    fn test_non_numeric_index_fails() {
        let err = parse("{name}").next().unwrap().unwrap_err();
        assert_eq!(err, FormatError::NonNumericIndex("name".to_string()));

        let err = parse("{1x:D}").next().unwrap().unwrap_err();
        assert_eq!(err, FormatError::NonNumericIndex("1x".to_string()));
    }

    #[test]
    fn test_unterminated_placeholder_fails() {
        let err = parse("{0 and then nothing").next().unwrap().unwrap_err();
        assert!(matches!(err, FormatError::UnterminatedPlaceholder(_)));
    }

    #[test]
    fn test_parse_is_restartable() {
        let template = "a {0} b";
        let first: Vec<_> = parse(template).collect();
        let second: Vec<_> = parse(template).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_positional_default_form() {
        let token = FormatToken::Positional {
            position: 1,
            format: None,
        };
        assert_eq!(token.render(log_args!["zero", "one"]).unwrap(), "one");
    }

    #[test]
    fn test_render_out_of_range_is_fatal() {
        let token = FormatToken::Positional {
            position: 2,
            format: None,
        };
        let err = token.render(log_args!["only"]).unwrap_err();
        assert_eq!(
            err,
            RenderError::PositionOutOfRange {
                position: 2,
                supplied: 1
            }
        );
    }

    #[test]
    fn test_render_null_argument() {
        let token = FormatToken::Positional {
            position: 0,
            format: Some("D4".to_string()),
        };
        let absent: Option<&str> = None;
        assert_eq!(token.render(log_args![absent]).unwrap(), "[NULL]");
    }

    #[test]
    fn test_concatenated_renders_match_substitution() {
        let rendered: String = tokens("run {0} of {1}")
            .iter()
            .map(|t| t.render(log_args![3_usize, 5_usize]).unwrap())
            .collect();
        assert_eq!(rendered, "run 3 of 5");
    }
}
