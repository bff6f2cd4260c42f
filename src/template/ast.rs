//! Parsed template nodes and literal text escaping

use super::scanner::{char_len, escape_len, ESCAPE};
use super::types::Delimiters;

/// A named variable reference, borrowed from the node it was parsed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub name: &'a str,
    pub argument: Option<&'a str>,
}

/// One unit of parsed template structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    /// Verbatim output. `raw` is the source span it was read from, escape
    /// pairs and empty or dropped references included.
    Text { text: String, raw: String },
    /// `${name}`
    Substitution(String),
    /// `${name:argument}`, argument taken verbatim
    Parameterized { name: String, argument: String },
}

impl TemplateNode {
    /// Build a text node from a raw source span, resolving its escape pairs.
    pub fn text(raw: &str, delimiters: &Delimiters) -> Self {
        Self::Text {
            text: unescape(raw, delimiters),
            raw: raw.to_string(),
        }
    }

    /// The variable reference this node asks for, `None` for literal text.
    pub fn token(&self) -> Option<Token<'_>> {
        match self {
            Self::Text { .. } => None,
            Self::Substitution(name) => Some(Token {
                name,
                argument: None,
            }),
            Self::Parameterized { name, argument } => Some(Token {
                name,
                argument: Some(argument),
            }),
        }
    }

    /// Append the source span this node was parsed from to `out`.
    pub fn write_source(&self, delimiters: &Delimiters, out: &mut String) {
        match self {
            Self::Text { raw, .. } => out.push_str(raw),
            Self::Substitution(name) => {
                out.push_str(delimiters.start());
                out.push_str(name);
                out.push_str(delimiters.end());
            }
            Self::Parameterized { name, argument } => {
                out.push_str(delimiters.start());
                out.push_str(name);
                out.push(':');
                out.push_str(argument);
                out.push_str(delimiters.end());
            }
        }
    }
}

/// Resolve `\` + start, `\` + end and `\\` pairs. Any other backslash is kept.
pub fn unescape(raw: &str, delimiters: &Delimiters) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut position = 0;

    while position < raw.len() {
        let step = match escape_len(raw, position, delimiters) {
            Some(len) => {
                out.push_str(&raw[position + ESCAPE.len()..position + len]);
                len
            }
            None => {
                let len = char_len(raw, position);
                out.push_str(&raw[position..position + len]);
                len
            }
        };
        position += step;
    }

    out
}
