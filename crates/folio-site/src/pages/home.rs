//! Home page: hero, focus areas, selected work.

use std::fmt::Write;

use folio_content::{CASES, FOCUS_AREAS, PROFILE};
use folio_renderer::escape_html;

use crate::layout::tag_list;
use crate::pages::PageContent;

pub(crate) fn page() -> PageContent {
    let mut body = String::new();

    body.push_str("<section class=\"hero\">\n");
    writeln!(body, "<h1>{}</h1>", escape_html(PROFILE.headline)).unwrap();
    writeln!(body, "<p>{}</p>", escape_html(PROFILE.intro)).unwrap();
    body.push_str(
        "<div class=\"hero-actions\">\n\
         <a class=\"button\" href=\"/cases\">View Case Studies</a>\n\
         <a class=\"button secondary\" href=\"/hire\">Hire Me</a>\n\
         </div>\n</section>\n",
    );

    body.push_str("<section>\n<h2>What I focus on</h2>\n<ul class=\"grid-3\">\n");
    for area in FOCUS_AREAS {
        writeln!(
            body,
            "<li>\n<h3>{}</h3>\n<p>{}</p>\n</li>",
            escape_html(area.title),
            escape_html(area.description)
        )
        .unwrap();
    }
    body.push_str("</ul>\n</section>\n");

    body.push_str(
        "<section>\n<h2>Selected work</h2>\n\
         <p>Problems I have solved for real products.</p>\n\
         <div class=\"cards\">\n",
    );
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
    body.push_str("</div>\n<a href=\"/cases\">All case studies &rarr;</a>\n</section>\n");

    PageContent {
        title: PROFILE.name.to_owned(),
        description: PROFILE.intro.to_owned(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_lists_every_case() {
        let page = page();
        for study in CASES {
            assert!(page.body.contains(&format!("href=\"/cases/{}\"", study.slug)));
        }
    }

    #[test]
    fn test_home_has_focus_areas() {
        let page = page();
        for area in FOCUS_AREAS {
            assert!(page.body.contains(area.title));
        }
    }
}
