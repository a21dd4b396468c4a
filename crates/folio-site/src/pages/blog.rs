//! Blog index and post pages.

use std::fmt::Write;

use folio_content::{POSTS, Post, format_date};
use folio_renderer::{escape_html, render};

use crate::layout::page_header;
use crate::pages::PageContent;

pub(crate) fn index() -> PageContent {
    let mut body = page_header(
        "Blog",
        "Engineering notes on patterns, tradeoffs, and technical thinking.",
    );
    body.push_str("<div class=\"cards\">\n");
    for post in POSTS {
        body.push_str(&card(post));
    }
    body.push_str("</div>\n");

    PageContent {
        title: "Blog".to_owned(),
        description: "Notes on frontend engineering — component patterns, performance, TypeScript, and technical decision-making.".to_owned(),
        body,
    }
}

pub(crate) fn post(post: &Post) -> PageContent {
    let mut body = String::new();
    body.push_str("<article>\n<a class=\"back-link\" href=\"/blog\">&larr; All posts</a>\n");
    writeln!(
        body,
        "<header>\n<time datetime=\"{}\">{}</time>\n<h1>{}</h1>\n</header>",
        post.date,
        format_date(post.date),
        escape_html(post.title)
    )
    .unwrap();
    // Post bodies are trusted authored content; the renderer output is
    // embedded without further sanitization.
    writeln!(body, "<div class=\"prose\">{}</div>", render(post.body)).unwrap();
    body.push_str("</article>\n");

    PageContent {
        title: post.title.to_owned(),
        description: post.summary.to_owned(),
        body,
    }
}

fn card(post: &Post) -> String {
    let mut html = String::new();
    writeln!(
        html,
        "<article>\n<a href=\"/blog/{}\">\n<time datetime=\"{}\">{}</time>\n<h3>{}</h3>\n<p>{}</p>\n</a>\n</article>",
        post.slug,
        post.date,
        format_date(post.date),
        escape_html(post.title),
        escape_html(post.summary)
    )
    .unwrap();
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_lists_every_post() {
        let page = index();
        for p in POSTS {
            assert!(page.body.contains(&format!("href=\"/blog/{}\"", p.slug)));
            assert!(page.body.contains(&format_date(p.date)));
        }
    }

    #[test]
    fn test_post_page_renders_body() {
        let first = &POSTS[0];
        let page = post(first);
        assert_eq!(page.title, first.title);
        assert!(page.body.contains("<div class=\"prose\">"));
        assert!(page.body.contains("<h2>"));
        assert!(page.body.contains("&larr; All posts"));
    }

    #[test]
    fn test_post_page_escapes_code_blocks() {
        // The type-safety post has generics in its fenced code.
        let p = folio_content::post_by_slug("type-safety-at-the-boundary").unwrap();
        let page = post(p);
        assert!(page.body.contains("z.infer&lt;typeof UserSchema&gt;"));
    }
}
