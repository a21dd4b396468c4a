//! Line-by-line content renderer.
//!
//! [`ContentRenderer`] is a two-state line scanner: it is either in normal
//! mode, where line-prefix rules and inline formatting apply, or inside a
//! fenced code block, where lines are escaped and emitted literally.

use crate::escape::escape_code;
use crate::inline::format_inline;

/// Parsing mode for the line scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Line-prefix rules and inline formatting apply.
    Normal,
    /// Inside a fenced code block; lines are escaped and emitted verbatim.
    InCodeBlock,
}

/// Line-based renderer for the restricted markdown subset.
///
/// State is local to one render call: a two-valued mode flag and the output
/// buffer. The scanner never reorders lines, buffers ahead, or looks behind
/// beyond the current mode, so rendering is a single pass and the output
/// always reflects exactly the lines consumed so far.
///
/// Rendering is total: there are no error conditions, and malformed input
/// (an unmatched fence or inline delimiter) degrades to literal output
/// rather than failing. An unterminated fence at end of input leaves the
/// code block open in the output.
#[derive(Debug)]
pub struct ContentRenderer {
    mode: Mode,
    output: String,
}

impl ContentRenderer {
    /// Create a renderer in normal mode with an empty output buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: Mode::Normal,
            output: String::with_capacity(1024),
        }
    }

    /// Render a document and return the accumulated HTML.
    #[must_use]
    pub fn render(mut self, text: &str) -> String {
        for line in text.lines() {
            self.render_line(line);
        }
        self.output
    }

    /// Process a single line according to the fixed rule priority:
    /// fence > code-block body > heading > list item > blank > paragraph.
    fn render_line(&mut self, line: &str) {
        // Fence lines toggle the mode and emit only the tag pair. The
        // language tag after the backticks, if any, is ignored.
        if line.starts_with("```") {
            match self.mode {
                Mode::Normal => {
                    self.output.push_str("<pre><code>");
                    self.mode = Mode::InCodeBlock;
                }
                Mode::InCodeBlock => {
                    self.output.push_str("</code></pre>");
                    self.mode = Mode::Normal;
                }
            }
            return;
        }

        if self.mode == Mode::InCodeBlock {
            // Code content is literal: escaped, never inline-formatted.
            self.output.push_str(&escape_code(line));
            self.output.push('\n');
            return;
        }

        if let Some(rest) = line.strip_prefix("## ") {
            self.output.push_str("<h2>");
            self.output.push_str(&format_inline(rest));
            self.output.push_str("</h2>");
        } else if let Some(rest) = line.strip_prefix("- ") {
            // Each item is emitted bare, without a surrounding <ul>. Known
            // gap in the grammar, kept for parity with existing content
            // styling.
            self.output.push_str("<li>");
            self.output.push_str(&format_inline(rest));
            self.output.push_str("</li>");
        } else if line.trim().is_empty() {
            // Block separator; no empty paragraph tag.
        } else {
            self.output.push_str("<p>");
            self.output.push_str(&format_inline(line));
            self.output.push_str("</p>");
        }
    }
}

impl Default for ContentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render document text to an HTML string.
///
/// Pure and deterministic: identical input yields identical output, and
/// independent calls share no state, so concurrent rendering needs no
/// coordination. Normal-mode text is not HTML-escaped — the content source
/// is trusted, author-controlled data. Code block content is escaped.
#[must_use]
pub fn render(text: &str) -> String {
    ContentRenderer::new().render(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_document() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(render("Hello, world."), "<p>Hello, world.</p>");
    }

    #[test]
    fn test_heading() {
        assert_eq!(render("## Title"), "<h2>Title</h2>");
    }

    #[test]
    fn test_heading_requires_space() {
        // "##Title" is not a heading; it falls through to paragraph.
        assert_eq!(render("##Title"), "<p>##Title</p>");
    }

    #[test]
    fn test_heading_with_inline_code() {
        assert_eq!(render("## Using `render`"), "<h2>Using <code>render</code></h2>");
    }

    #[test]
    fn test_list_items_without_container() {
        // Consecutive items are siblings with no enclosing <ul>.
        assert_eq!(render("- a\n- b"), "<li>a</li><li>b</li>");
    }

    #[test]
    fn test_list_item_with_bold() {
        assert_eq!(
            render("- **key** point"),
            "<li><strong>key</strong> point</li>"
        );
    }

    #[test]
    fn test_blank_line_suppression() {
        assert_eq!(
            render("para one\n\npara two"),
            "<p>para one</p><p>para two</p>"
        );
    }

    #[test]
    fn test_whitespace_only_line_suppressed() {
        assert_eq!(render("a\n   \t\nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_inline_composition() {
        assert_eq!(
            render("Use `code` and **bold**"),
            "<p>Use <code>code</code> and <strong>bold</strong></p>"
        );
    }

    #[test]
    fn test_code_block_round_trip() {
        assert_eq!(
            render("```\nlet x = 1;\n```"),
            "<pre><code>let x = 1;\n</code></pre>"
        );
    }

    #[test]
    fn test_code_block_language_tag_ignored() {
        assert_eq!(
            render("```rust\nfn main() {}\n```"),
            "<pre><code>fn main() {}\n</code></pre>"
        );
    }

    #[test]
    fn test_code_block_escaping() {
        assert_eq!(
            render("```\na < b && b > c\n```"),
            "<pre><code>a &lt; b &amp;&amp; b &gt; c\n</code></pre>"
        );
    }

    #[test]
    fn test_code_block_escaping_not_doubled() {
        assert_eq!(render("```\na & b\n```"), "<pre><code>a &amp; b\n</code></pre>");
    }

    #[test]
    fn test_code_block_prefix_rules_suspended() {
        // Heading and list prefixes are literal inside a code block.
        assert_eq!(
            render("```\n## not a heading\n- not a list\n```"),
            "<pre><code>## not a heading\n- not a list\n</code></pre>"
        );
    }

    #[test]
    fn test_code_block_no_inline_formatting() {
        assert_eq!(
            render("```\n`lit` and **lit**\n```"),
            "<pre><code>`lit` and **lit**\n</code></pre>"
        );
    }

    #[test]
    fn test_unterminated_fence_left_open() {
        // The open tag was emitted and no closing tag is appended.
        assert_eq!(render("```\ntrailing code"), "<pre><code>trailing code\n");
    }

    #[test]
    fn test_consecutive_fences() {
        assert_eq!(
            render("```\na\n```\n```\nb\n```"),
            "<pre><code>a\n</code></pre><pre><code>b\n</code></pre>"
        );
    }

    #[test]
    fn test_normal_mode_not_escaped() {
        // Only code block content is escaped; the content source is
        // trusted, so a raw angle bracket passes through.
        assert_eq!(render("a < b"), "<p>a < b</p>");
    }

    #[test]
    fn test_unsupported_constructs_are_paragraphs() {
        assert_eq!(render("# One"), "<p># One</p>");
        assert_eq!(render("> quote"), "<p>> quote</p>");
        assert_eq!(
            render("[link](https://example.com)"),
            "<p>[link](https://example.com)</p>"
        );
    }

    #[test]
    fn test_mixed_document() {
        let text = "## Intro\n\nFirst `point`.\n\n- one\n- two\n\n```sh\nls > out\n```\n\nDone.";
        assert_eq!(
            render(text),
            "<h2>Intro</h2><p>First <code>point</code>.</p><li>one</li><li>two</li>\
             <pre><code>ls &gt; out\n</code></pre><p>Done.</p>"
        );
    }

    #[test]
    fn test_deterministic() {
        let text = "## A\n\n`b` **c**\n\n```\nd\n```";
        assert_eq!(render(text), render(text));
    }
}
