//! Delimiter matching over template source.
//!
//! Positions are byte offsets into the source. Comparison is a plain byte
//! comparison: no case folding, no normalisation.

use super::types::Delimiters;

/// Escape marker accepted in template source
pub const ESCAPE: &str = "\\";

/// Returns true iff `literal` is non-empty and `text` contains it at `position`.
pub fn starts_with(text: &str, position: usize, literal: &str) -> bool {
    if literal.is_empty() {
        return false;
    }

    text.as_bytes()
        .get(position..)
        .is_some_and(|rest| rest.starts_with(literal.as_bytes()))
}

/// Length of the escape pair at `position`, if there is one.
///
/// An escape pair is the escape marker followed by the escape marker itself,
/// the start delimiter, or the end delimiter. The returned length covers both
/// halves so the caller can step over the pair in one move.
pub fn escape_len(text: &str, position: usize, delimiters: &Delimiters) -> Option<usize> {
    if !starts_with(text, position, ESCAPE) {
        return None;
    }

    let next = position + ESCAPE.len();
    [ESCAPE, delimiters.start(), delimiters.end()]
        .into_iter()
        .find(|token| starts_with(text, next, token))
        .map(|token| ESCAPE.len() + token.len())
}

/// Byte length of the character at `position` (1 past the end of input).
pub fn char_len(text: &str, position: usize) -> usize {
    text.get(position..)
        .and_then(|rest| rest.chars().next())
        .map_or(1, char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_at_position() {
        assert!(starts_with("ab${c}", 2, "${"));
        assert!(!starts_with("ab${c}", 1, "${"));
    }

    #[test]
    fn test_starts_with_does_not_run_past_end() {
        assert!(!starts_with("ab$", 2, "${"));
        assert!(!starts_with("ab", 5, "a"));
    }

    #[test]
    fn test_starts_with_empty_literal_is_false() {
        assert!(!starts_with("abc", 0, ""));
    }

    #[test]
    fn test_starts_with_is_case_sensitive() {
        assert!(!starts_with("ABC", 0, "abc"));
    }

    #[test]
    fn test_escape_len() {
        let delimiters = Delimiters::default();
        assert_eq!(escape_len("\\${", 0, &delimiters), Some(3));
        assert_eq!(escape_len("\\}", 0, &delimiters), Some(2));
        assert_eq!(escape_len("\\\\", 0, &delimiters), Some(2));
        assert_eq!(escape_len("\\n", 0, &delimiters), None);
        assert_eq!(escape_len("\\", 0, &delimiters), None);
        assert_eq!(escape_len("x\\}", 0, &delimiters), None);
    }

    #[test]
    fn test_escape_len_multi_character_delimiters() {
        let delimiters = Delimiters::new("{{", "}}").unwrap();
        assert_eq!(escape_len("\\{{", 0, &delimiters), Some(3));
        assert_eq!(escape_len("\\{x", 0, &delimiters), None);
    }

    #[test]
    fn test_char_len_multibyte() {
        assert_eq!(char_len("é", 0), 2);
        assert_eq!(char_len("a", 0), 1);
        assert_eq!(char_len("a", 1), 1);
    }
}
