//! Route-to-document rendering.

use folio_content::{case_by_slug, post_by_slug};

use crate::layout::{STYLESHEET, document};
use crate::pages::{self, PageContent};
use crate::route::Route;

/// A fully rendered page.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    /// URL path of the route this page was rendered for.
    pub path: String,
    /// Document title as placed in `<title>`.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Complete HTML document.
    pub html: String,
}

/// Error returned when page rendering fails.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// No post with the requested slug.
    #[error("Post not found: {0}")]
    PostNotFound(String),
    /// No case study with the requested slug.
    #[error("Case study not found: {0}")]
    CaseNotFound(String),
}

/// Page renderer for the whole site.
///
/// Holds the site-level settings interpolated into every document. Render
/// calls share no mutable state, so one `Site` can serve concurrent
/// renders without coordination.
#[derive(Clone, Debug)]
pub struct Site {
    title: String,
    base_url: String,
}

impl Site {
    /// Create a site with the given title and base URL.
    #[must_use]
    pub fn new(title: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            base_url: base_url.into(),
        }
    }

    /// The site base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Stylesheet to export next to the rendered pages.
    #[must_use]
    pub fn stylesheet() -> &'static str {
        STYLESHEET
    }

    /// Render a route to a complete HTML document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::PostNotFound`] or [`RenderError::CaseNotFound`]
    /// for a dynamic route whose slug has no content entry.
    pub fn render(&self, route: &Route) -> Result<RenderedPage, RenderError> {
        let content = Self::page_content(route)?;
        tracing::debug!(path = %route.path(), title = %content.title, "rendered page");

        let title = self.document_title(route, &content);
        let canonical = format!("{}{}", self.base_url, route.path());
        let html = document(&title, &content.description, &canonical, &content.body);
        Ok(RenderedPage {
            path: route.path(),
            title,
            description: content.description,
            html,
        })
    }

    /// Render every route of the site.
    ///
    /// # Errors
    ///
    /// Propagates the first render failure; with the static route set this
    /// only happens if the content tables and route enumeration disagree.
    pub fn render_all(&self) -> Result<Vec<RenderedPage>, RenderError> {
        Route::all().iter().map(|route| self.render(route)).collect()
    }

    fn page_content(route: &Route) -> Result<PageContent, RenderError> {
        match route {
            Route::Home => Ok(pages::home::page()),
            Route::Blog => Ok(pages::blog::index()),
            Route::Post(slug) => post_by_slug(slug)
                .map(pages::blog::post)
                .ok_or_else(|| RenderError::PostNotFound(slug.clone())),
            Route::Cases => Ok(pages::cases::index()),
            Route::Case(slug) => case_by_slug(slug)
                .map(pages::cases::detail)
                .ok_or_else(|| RenderError::CaseNotFound(slug.clone())),
            Route::Hire => Ok(pages::hire::page()),
        }
    }

    /// `<title>` text: the home page uses the site title alone, other
    /// pages append it as a suffix.
    fn document_title(&self, route: &Route, content: &PageContent) -> String {
        match route {
            Route::Home => self.title.clone(),
            _ => format!("{} — {}", content.title, self.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn site() -> Site {
        Site::new("Vladyslav Kovalchuk", "https://vladkovalchuk.dev")
    }

    #[test]
    fn test_render_home() {
        let page = site().render(&Route::Home).unwrap();
        assert_eq!(page.path, "/");
        assert_eq!(page.title, "Vladyslav Kovalchuk");
        assert!(page.html.starts_with("<!DOCTYPE html>"));
        assert!(
            page.html
                .contains("<link rel=\"canonical\" href=\"https://vladkovalchuk.dev/\">")
        );
    }

    #[test]
    fn test_render_post_title_suffix() {
        let page = site().render(&Route::Post("when-to-use-ref".into())).unwrap();
        assert_eq!(
            page.title,
            "When to reach for useRef instead of useState — Vladyslav Kovalchuk"
        );
        assert!(page.html.contains("<pre><code>"));
    }

    #[test]
    fn test_render_unknown_post() {
        let result = site().render(&Route::Post("missing".into()));
        assert!(matches!(result, Err(RenderError::PostNotFound(_))));
    }

    #[test]
    fn test_render_unknown_case() {
        let result = site().render(&Route::Case("missing".into()));
        assert!(matches!(result, Err(RenderError::CaseNotFound(_))));
    }

    #[test]
    fn test_render_all_routes() {
        let pages = site().render_all().unwrap();
        assert_eq!(pages.len(), Route::all().len());
        for page in &pages {
            assert!(page.html.contains("</html>"), "{}", page.path);
        }
    }

    #[test]
    fn test_render_deterministic() {
        let site = site();
        let a = site.render(&Route::Blog).unwrap();
        let b = site.render(&Route::Blog).unwrap();
        assert_eq!(a.html, b.html);
    }
}
