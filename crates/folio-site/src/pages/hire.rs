//! Hire page: working preferences, tech stack, contact details.

use std::fmt::Write;

use folio_content::{BEST_WITH, CONTACTS, TECH_STACK};
use folio_renderer::escape_html;

use crate::layout::{page_header, tag_list};
use crate::pages::PageContent;

pub(crate) fn page() -> PageContent {
    let mut body = page_header(
        "Hire Me",
        "I am open to full-time positions and contract engagements.",
    );

    body.push_str("<section>\n<h2>What I work best with</h2>\n<ul class=\"grid-3\">\n");
    for pref in BEST_WITH {
        writeln!(
            body,
            "<li>\n<h3>{}</h3>\n<p>{}</p>\n</li>",
            escape_html(pref.title),
            escape_html(pref.description)
        )
        .unwrap();
    }
    body.push_str("</ul>\n</section>\n");

    body.push_str("<section>\n<h2>Tech stack</h2>\n");
    body.push_str(&tag_list(TECH_STACK, "Tech stack"));
    body.push_str("</section>\n");

    body.push_str(
        "<section>\n<h2>Get in touch</h2>\n\
         <p>The best way to reach me is email. I typically reply within a day.</p>\n<ul>\n",
    );
    for contact in CONTACTS {
        writeln!(
            body,
            "<li><span>{}</span> <a href=\"{}\">{}</a></li>",
            escape_html(contact.label),
            escape_html(contact.href),
            escape_html(contact.handle)
        )
        .unwrap();
    }
    body.push_str("</ul>\n<a class=\"button\" href=\"/cases\">View my work</a>\n</section>\n");

    PageContent {
        title: "Hire Me".to_owned(),
        description: "Frontend engineer available for full-time roles and contract work. React, TypeScript, Next.js.".to_owned(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hire_lists_contacts() {
        let page = page();
        for contact in CONTACTS {
            assert!(page.body.contains(contact.handle));
        }
    }

    #[test]
    fn test_hire_lists_stack() {
        let page = page();
        for tech in TECH_STACK {
            assert!(page.body.contains(&format!("<li>{tech}</li>")));
        }
    }
}
