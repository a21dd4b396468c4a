//! Inline span formatting for normal-mode line content.
//!
//! Resolves the two sub-line markers of the content grammar: backtick code
//! spans and double-asterisk bold spans. Spans must open and close on the
//! same line; an unmatched delimiter is left as literal text.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

static BOLD_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

/// Apply inline formatting to a line of normal-mode content.
///
/// Code spans are extracted before bold spans; the two substitutions are
/// independent of each other. Content inside a code span is not escaped,
/// matching the trust assumption of the renderer as a whole.
#[must_use]
pub fn format_inline(text: &str) -> String {
    let code: Cow<'_, str> = CODE_SPAN_RE.replace_all(text, "<code>$1</code>");
    BOLD_SPAN_RE.replace_all(&code, "<strong>$1</strong>").into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_code_span() {
        assert_eq!(format_inline("use `foo` here"), "use <code>foo</code> here");
    }

    #[test]
    fn test_bold_span() {
        assert_eq!(format_inline("**important**"), "<strong>important</strong>");
    }

    #[test]
    fn test_composition() {
        assert_eq!(
            format_inline("Use `code` and **bold**"),
            "Use <code>code</code> and <strong>bold</strong>"
        );
    }

    #[test]
    fn test_multiple_spans_non_greedy() {
        assert_eq!(
            format_inline("`a` and `b`"),
            "<code>a</code> and <code>b</code>"
        );
        assert_eq!(
            format_inline("**a** or **b**"),
            "<strong>a</strong> or <strong>b</strong>"
        );
    }

    #[test]
    fn test_unmatched_backtick_left_literal() {
        assert_eq!(format_inline("a ` b"), "a ` b");
    }

    #[test]
    fn test_unmatched_asterisks_left_literal() {
        assert_eq!(format_inline("a ** b"), "a ** b");
    }

    #[test]
    fn test_empty_span_not_matched() {
        assert_eq!(format_inline("``"), "``");
        assert_eq!(format_inline("****"), "****");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(format_inline("no markers here"), "no markers here");
    }

    #[test]
    fn test_single_asterisk_not_bold() {
        assert_eq!(format_inline("*italic* is not supported"), "*italic* is not supported");
    }
}
