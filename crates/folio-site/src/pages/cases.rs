//! Case study index and detail pages.

use std::fmt::Write;

use folio_content::{CASES, CaseStudy};
use folio_renderer::escape_html;

use crate::layout::{page_header, tag_list};
use crate::pages::PageContent;

pub(crate) fn index() -> PageContent {
    let mut body = page_header(
        "Case Studies",
        "Problems I have worked on, how I approached them, and what happened.",
    );
    body.push_str("<div class=\"cards\">\n");
    for study in CASES {
        writeln!(
            body,
            "<article>\n<a href=\"/cases/{}\">\n<h3>{}</h3>\n<p>{}</p>\n</a>\n{}</article>",
            study.slug,
            escape_html(study.title),
            escape_html(study.summary),
            tag_list(study.tech_stack, "Tech stack")
        )
        .unwrap();
    }
    body.push_str("</div>\n");

    PageContent {
        title: "Case Studies".to_owned(),
        description: "Selected frontend engineering work — design systems, performance optimization, and real-time collaboration.".to_owned(),
        body,
    }
}

pub(crate) fn detail(study: &CaseStudy) -> PageContent {
    let mut body = String::new();
    body.push_str("<article>\n<a class=\"back-link\" href=\"/cases\">&larr; All cases</a>\n");
    writeln!(body, "<h1>{}</h1>", escape_html(study.title)).unwrap();
    body.push_str(&tag_list(study.tech_stack, "Tech stack"));

    if !study.links.is_empty() {
        body.push_str("<div class=\"case-links\">\n");
        for link in study.links {
            writeln!(
                body,
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape_html(link.href),
                escape_html(link.label)
            )
            .unwrap();
        }
        body.push_str("</div>\n");
    }

    body.push_str(&section("Problem", &paragraph(study.problem)));
    body.push_str(&section("Constraints", &bullet_list(study.constraints)));
    body.push_str(&section("Solution", &paragraph(study.solution)));
    body.push_str(&section("Key technical decisions", &decision_list(study)));
    body.push_str(&section("Outcome", &paragraph(study.outcome)));
    body.push_str("</article>\n");

    PageContent {
        title: study.title.to_owned(),
        description: study.summary.to_owned(),
        body,
    }
}

fn section(title: &str, inner: &str) -> String {
    format!("<section class=\"case-section\">\n<h2>{title}</h2>\n{inner}</section>\n")
}

fn paragraph(text: &str) -> String {
    format!("<p>{}</p>\n", escape_html(text))
}

fn bullet_list(items: &[&str]) -> String {
    let mut html = String::from("<ul>\n");
    for item in items {
        writeln!(html, "<li>{}</li>", escape_html(item)).unwrap();
    }
    html.push_str("</ul>\n");
    html
}

fn decision_list(study: &CaseStudy) -> String {
    let mut html = String::from("<dl>\n");
    for decision in study.decisions {
        writeln!(
            html,
            "<dt>{}</dt>\n<dd>{}</dd>",
            escape_html(decision.title),
            escape_html(decision.rationale)
        )
        .unwrap();
    }
    html.push_str("</dl>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_lists_every_case() {
        let page = index();
        for study in CASES {
            assert!(page.body.contains(&format!("href=\"/cases/{}\"", study.slug)));
        }
    }

    #[test]
    fn test_detail_has_all_sections() {
        let page = detail(&CASES[0]);
        for heading in [
            "Problem",
            "Constraints",
            "Solution",
            "Key technical decisions",
            "Outcome",
        ] {
            assert!(page.body.contains(&format!("<h2>{heading}</h2>")));
        }
    }

    #[test]
    fn test_detail_has_external_links() {
        let page = detail(&CASES[0]);
        assert!(page.body.contains("Live demo"));
        assert!(page.body.contains("rel=\"noopener noreferrer\""));
    }

    #[test]
    fn test_detail_lists_decisions() {
        let study = &CASES[0];
        let page = detail(study);
        for decision in study.decisions {
            assert!(page.body.contains(&format!("<dt>{}</dt>", decision.title)));
        }
    }
}
