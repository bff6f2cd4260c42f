//! Command line templates.
//!
//! This module provides:
//! - The delimiter scanner and single-pass parser turning source into nodes
//! - [`Template`], the immutable parsed form held by a menu command
//! - Rendering against a [`VariableResolver`](crate::resolver::VariableResolver)
//!
//! # Example
//!
//! ```ignore
//! let template = Template::new("${me} says hi in ${channel}");
//! let resolver = ContextResolver::new(
//!     CommandType::Channel,
//!     RenderContext::channel("Bob", "#test"),
//!     prompt,
//! );
//!
//! assert_eq!(template.render(&resolver).await?, "Bob says hi in #test");
//! ```
//!
//! # Escaping
//!
//! In literal text, `\${`, `\}` and `\\` stand for `${`, `}` and `\`. Names and
//! arguments inside a reference are taken verbatim, escapes included.

mod ast;
mod parser;
mod render;
mod scanner;
mod types;

pub use ast::{unescape, TemplateNode, Token};
pub use parser::{parse, Parsed, TemplateParser};
pub use render::render_all;
pub use scanner::{escape_len, starts_with, ESCAPE};
pub use types::{Delimiters, ParseOptions, TemplateError, TemplateResult, UnterminatedPolicy};

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<TemplateNode>,
    delimiters: Delimiters,
}

impl Template {
    /// Parse with the default `${` / `}` delimiters, dropping unterminated references
    pub fn new(source: &str) -> Self {
        let options = ParseOptions::default();
        Self {
            nodes: parse(source, &options).nodes,
            delimiters: options.delimiters,
        }
    }

    /// Parse with explicit options.
    ///
    /// Fails only under [`UnterminatedPolicy::Reject`].
    pub fn with_options(source: &str, options: &ParseOptions) -> TemplateResult<Self> {
        let parsed = parse(source, options);

        if let (UnterminatedPolicy::Reject, Some(offset)) =
            (options.unterminated, parsed.unterminated)
        {
            return Err(TemplateError::Unterminated { offset });
        }

        Ok(Self {
            nodes: parsed.nodes,
            delimiters: options.delimiters.clone(),
        })
    }

    pub fn nodes(&self) -> &[TemplateNode] {
        &self.nodes
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// Names referenced by this template, in order
    pub fn tokens(&self) -> impl Iterator<Item = Token<'_>> {
        self.nodes.iter().filter_map(TemplateNode::token)
    }

    /// The source text this template was parsed from
    pub fn to_source(&self) -> String {
        let mut source = String::new();
        for node in &self.nodes {
            node.write_source(&self.delimiters, &mut source);
        }
        source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_source_roundtrip() {
        for source in [
            "plain text",
            "${me} says hi in ${channel}",
            "${color:4,0}bold red${end}",
            "a\\${b} and \\\\ and \\}",
            "a\\${b}",
            "/kick ${channel} ${user} ${prompt:Reason: be nice}",
            "x \\q ${a\\}b} \\",
            "hi ${me",
        ] {
            assert_eq!(Template::new(source).to_source(), source);
        }
    }

    #[test]
    fn test_empty_reference_roundtrip_keeps_text() {
        let template = Template::new("$${}{");
        assert_eq!(template.to_source(), "$${}{");

        let reparsed = Template::new(&template.to_source());
        assert_eq!(reparsed, template);
        match reparsed.nodes() {
            [TemplateNode::Text { text, .. }] => assert_eq!(text, "${"),
            other => panic!("unexpected nodes: {:?}", other),
        }
    }

    #[test]
    fn test_reparse_of_source_is_stable() {
        let template = Template::new("x \\q ${a}${b:c} \\${");
        let reparsed = Template::new(&template.to_source());
        assert_eq!(reparsed, template);
    }

    #[test]
    fn test_reject_policy_fails_on_unterminated() {
        let options = ParseOptions::new(Delimiters::default(), UnterminatedPolicy::Reject);
        assert_eq!(
            Template::with_options("hi ${me", &options),
            Err(TemplateError::Unterminated { offset: 3 })
        );
        assert!(Template::with_options("hi ${me}", &options).is_ok());
    }

    #[test]
    fn test_tokens() {
        let template = Template::new("${me} ${color:4}");
        let names: Vec<_> = template.tokens().map(|t| t.name).collect();
        assert_eq!(names, vec!["me", "color"]);
    }
}
