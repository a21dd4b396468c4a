//! HTML escaping helpers.

/// Escape code block content for embedding in `<pre><code>`.
///
/// Replaces the three characters that are unsafe inside a code element:
/// `&`, `<`, `>`. The ampersand is replaced first so the entities produced
/// by the other two substitutions are not escaped a second time.
#[must_use]
pub fn escape_code(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text for embedding in HTML content or attribute values.
///
/// Used by page chrome when interpolating titles, summaries, and other
/// metadata into markup. Not applied to rendered body content — the
/// renderer's output is already HTML.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_code_all_three() {
        assert_eq!(escape_code("a < b && b > c"), "a &lt; b &amp;&amp; b &gt; c");
    }

    #[test]
    fn test_escape_code_ampersand_first() {
        // Escaping must not double-escape the entities it produces.
        assert_eq!(escape_code("a & b"), "a &amp; b");
        assert_eq!(escape_code("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_code_leaves_quotes() {
        assert_eq!(escape_code(r#"say "hi""#), r#"say "hi""#);
    }

    #[test]
    fn test_escape_html_quotes() {
        assert_eq!(
            escape_html(r#"<a href="x">'y'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;y&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
