//! Page chrome: document shell, header navigation, and footer.
//!
//! All dynamic text interpolated here is escaped; rendered body content is
//! embedded as-is (it is already HTML).

use std::fmt::Write;

use folio_content::{CONTACTS, PROFILE};
use folio_renderer::escape_html;

/// Stylesheet served alongside the exported pages.
pub const STYLESHEET: &str = include_str!("styles.css");

/// Header navigation entries: route path and label.
const NAV: &[(&str, &str)] = &[("/cases", "Cases"), ("/blog", "Blog"), ("/hire", "Hire Me")];

/// Wrap a page body in the full HTML document shell.
#[must_use]
pub fn document(title: &str, description: &str, canonical: &str, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 2048);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    writeln!(html, "<title>{}</title>", escape_html(title)).unwrap();
    writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        escape_html(description)
    )
    .unwrap();
    writeln!(
        html,
        "<link rel=\"canonical\" href=\"{}\">",
        escape_html(canonical)
    )
    .unwrap();
    html.push_str("<link rel=\"stylesheet\" href=\"/styles.css\">\n");
    html.push_str("</head>\n<body>\n");
    html.push_str(&header());
    html.push_str("<main>\n");
    html.push_str(body);
    html.push_str("\n</main>\n");
    html.push_str(&footer());
    html.push_str("</body>\n</html>\n");
    html
}

/// Site header with the main navigation.
fn header() -> String {
    let mut html = String::new();
    html.push_str("<header class=\"site-header\">\n");
    writeln!(
        html,
        "<a class=\"site-name\" href=\"/\">{}</a>",
        escape_html(PROFILE.name)
    )
    .unwrap();
    html.push_str("<nav aria-label=\"Main\">\n");
    for (href, label) in NAV {
        writeln!(html, "<a href=\"{href}\">{label}</a>").unwrap();
    }
    html.push_str("</nav>\n</header>\n");
    html
}

/// Site footer with navigation and contact links.
fn footer() -> String {
    let mut html = String::new();
    html.push_str("<footer class=\"site-footer\">\n<nav aria-label=\"Footer\">\n");
    for (href, label) in NAV {
        writeln!(html, "<a href=\"{href}\">{label}</a>").unwrap();
    }
    html.push_str("</nav>\n<div class=\"footer-contacts\">\n");
    for contact in CONTACTS {
        let external = !contact.href.starts_with("mailto:");
        if external {
            writeln!(
                html,
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape_html(contact.href),
                escape_html(contact.label)
            )
            .unwrap();
        } else {
            writeln!(
                html,
                "<a href=\"{}\">{}</a>",
                escape_html(contact.href),
                escape_html(contact.label)
            )
            .unwrap();
        }
    }
    html.push_str("</div>\n</footer>\n");
    html
}

/// Section heading block shared by the listing and hire pages.
#[must_use]
pub fn page_header(title: &str, subtitle: &str) -> String {
    format!(
        "<div class=\"page-header\">\n<h1>{}</h1>\n<p>{}</p>\n</div>\n",
        escape_html(title),
        escape_html(subtitle)
    )
}

/// Tag list used for tech stacks.
#[must_use]
pub fn tag_list(tags: &[&str], label: &str) -> String {
    let mut html = String::new();
    writeln!(html, "<ul class=\"tags\" aria-label=\"{}\">", escape_html(label)).unwrap();
    for tag in tags {
        writeln!(html, "<li>{}</li>", escape_html(tag)).unwrap();
    }
    html.push_str("</ul>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_escapes_title() {
        let html = document("A <title> & more", "desc", "https://example.com/", "<p>body</p>");
        assert!(html.contains("<title>A &lt;title&gt; &amp; more</title>"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_document_has_chrome() {
        let html = document("T", "d", "https://example.com/", "");
        assert!(html.contains("<link rel=\"canonical\" href=\"https://example.com/\">"));
        assert!(html.contains("class=\"site-header\""));
        assert!(html.contains("class=\"site-footer\""));
        assert!(html.contains("aria-label=\"Main\""));
        assert!(html.contains("href=\"/styles.css\""));
    }

    #[test]
    fn test_footer_contact_rel() {
        let html = document("T", "d", "https://example.com/", "");
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("href=\"mailto:"));
    }

    #[test]
    fn test_tag_list() {
        let html = tag_list(&["React", "TypeScript"], "Tech stack");
        assert!(html.contains("<li>React</li>"));
        assert!(html.contains("aria-label=\"Tech stack\""));
    }
}
