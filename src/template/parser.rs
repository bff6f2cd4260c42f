//! Single-pass template scanner producing [`TemplateNode`]s

use super::ast::{unescape, TemplateNode};
use super::scanner::{char_len, escape_len, starts_with};
use super::types::{ParseOptions, UnterminatedPolicy};

/// Parameter separator inside a variable reference
const PARAMETER_SEPARATOR: char = ':';

/// Scanner state. `token` is the offset of the start delimiter that opened
/// the reference currently being read.
#[derive(Debug)]
enum State {
    Text { start: usize },
    Substitution { token: usize, start: usize },
    Parameterized { token: usize, start: usize, name: String },
}

/// Outcome of a parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub nodes: Vec<TemplateNode>,
    /// Offset of a reference left open at end of input, whatever the policy did with it
    pub unterminated: Option<usize>,
}

pub struct TemplateParser<'a> {
    source: &'a str,
    options: &'a ParseOptions,
    position: usize,
    nodes: Vec<TemplateNode>,
    /// Unescaped text of the current run
    text: String,
    /// Source offset where the current text run began
    text_start: usize,
}

impl<'a> TemplateParser<'a> {
    pub fn new(source: &'a str, options: &'a ParseOptions) -> Self {
        Self {
            source,
            options,
            position: 0,
            nodes: Vec::new(),
            text: String::new(),
            text_start: 0,
        }
    }

    pub fn parse(mut self) -> Parsed {
        let mut state = State::Text { start: 0 };

        while self.position < self.source.len() {
            state = match state {
                State::Text { start } => self.step_text(start),
                State::Substitution { token, start } => self.step_substitution(token, start),
                State::Parameterized { token, start, name } => {
                    self.step_parameterized(token, start, name)
                }
            };
        }

        self.finish(state)
    }

    fn step_text(&mut self, start: usize) -> State {
        let options = self.options;
        let delimiters = &options.delimiters;

        if starts_with(self.source, self.position, delimiters.start()) {
            self.append_text(start, self.position);
            let token = self.position;
            self.position += delimiters.start().len();
            return State::Substitution {
                token,
                start: self.position,
            };
        }

        self.advance();
        State::Text { start }
    }

    fn step_substitution(&mut self, token: usize, start: usize) -> State {
        let options = self.options;
        let delimiters = &options.delimiters;

        if self.source[self.position..].starts_with(PARAMETER_SEPARATOR) {
            let name = self.source[start..self.position].to_string();
            self.position += PARAMETER_SEPARATOR.len_utf8();
            return State::Parameterized {
                token,
                start: self.position,
                name,
            };
        }

        if starts_with(self.source, self.position, delimiters.end()) {
            if start != self.position {
                let name = self.source[start..self.position].to_string();
                self.push_reference(token, TemplateNode::Substitution(name));
            }
            self.position += delimiters.end().len();
            return State::Text {
                start: self.position,
            };
        }

        self.advance();
        State::Substitution { token, start }
    }

    fn step_parameterized(&mut self, token: usize, start: usize, name: String) -> State {
        let options = self.options;
        let delimiters = &options.delimiters;

        if starts_with(self.source, self.position, delimiters.end()) {
            if start != self.position {
                let argument = self.source[start..self.position].to_string();
                self.push_reference(token, TemplateNode::Parameterized { name, argument });
            }
            self.position += delimiters.end().len();
            return State::Text {
                start: self.position,
            };
        }

        self.advance();
        State::Parameterized { token, start, name }
    }

    /// Step over one escape pair or one character.
    fn advance(&mut self) {
        self.position += escape_len(self.source, self.position, &self.options.delimiters)
            .unwrap_or_else(|| char_len(self.source, self.position));
    }

    fn append_text(&mut self, start: usize, end: usize) {
        if start < end {
            let delimiters = &self.options.delimiters;
            self.text.push_str(&unescape(&self.source[start..end], delimiters));
        }
    }

    /// Close the current text run at `token` and push the reference opened there.
    fn push_reference(&mut self, token: usize, node: TemplateNode) {
        self.flush_text(token);
        self.nodes.push(node);
        self.text_start = self.position + self.options.delimiters.end().len();
    }

    /// Emit the current text run, if it covers any source.
    ///
    /// Empty references and dropped tails yield no output but stay in `raw`,
    /// so text on both sides of them lands in one node.
    fn flush_text(&mut self, end: usize) {
        if self.text_start < end {
            self.nodes.push(TemplateNode::Text {
                text: std::mem::take(&mut self.text),
                raw: self.source[self.text_start..end].to_string(),
            });
        }
        self.text_start = end;
    }

    fn finish(mut self, state: State) -> Parsed {
        let end = self.source.len();

        let token = match state {
            State::Text { start } => {
                self.append_text(start, end);
                self.flush_text(end);
                return Parsed {
                    nodes: self.nodes,
                    unterminated: None,
                };
            }
            State::Substitution { token, .. } | State::Parameterized { token, .. } => token,
        };

        match self.options.unterminated {
            UnterminatedPolicy::Drop | UnterminatedPolicy::Reject => {
                tracing::debug!(
                    offset = token,
                    policy = ?self.options.unterminated,
                    "Unterminated variable reference"
                );
            }
            UnterminatedPolicy::Literal => self.append_text(token, end),
        }
        self.flush_text(end);

        Parsed {
            nodes: self.nodes,
            unterminated: Some(token),
        }
    }
}

/// Parse `source` into nodes.
pub fn parse(source: &str, options: &ParseOptions) -> Parsed {
    TemplateParser::new(source, options).parse()
}
