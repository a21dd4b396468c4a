//! Site routes.

use std::path::PathBuf;

use folio_content::{CASES, POSTS};

/// A site route.
///
/// The route set is closed: the site has four static pages plus one page
/// per post and per case study. [`Route::all`] enumerates every route for
/// static export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Blog,
    Post(String),
    Cases,
    Case(String),
    Hire,
}

impl Route {
    /// URL path for this route, with a leading slash and no trailing slash
    /// (except the root).
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Blog => "/blog".to_owned(),
            Self::Post(slug) => format!("/blog/{slug}"),
            Self::Cases => "/cases".to_owned(),
            Self::Case(slug) => format!("/cases/{slug}"),
            Self::Hire => "/hire".to_owned(),
        }
    }

    /// Output file for this route in a static export, relative to the
    /// output directory. Every route maps to a directory `index.html` so
    /// exported URLs need no extension.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        match self {
            Self::Home => PathBuf::from("index.html"),
            _ => PathBuf::from(format!("{}/index.html", self.path().trim_start_matches('/'))),
        }
    }

    /// Every route of the site, in export order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut routes = vec![Self::Home, Self::Blog];
        routes.extend(POSTS.iter().map(|p| Self::Post(p.slug.to_owned())));
        routes.push(Self::Cases);
        routes.extend(CASES.iter().map(|c| Self::Case(c.slug.to_owned())));
        routes.push(Self::Hire);
        routes
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Blog.path(), "/blog");
        assert_eq!(Route::Post("a-b".into()).path(), "/blog/a-b");
        assert_eq!(Route::Hire.path(), "/hire");
    }

    #[test]
    fn test_output_paths() {
        assert_eq!(Route::Home.output_path(), PathBuf::from("index.html"));
        assert_eq!(Route::Blog.output_path(), PathBuf::from("blog/index.html"));
        assert_eq!(
            Route::Case("web3-chat".into()).output_path(),
            PathBuf::from("cases/web3-chat/index.html")
        );
    }

    #[test]
    fn test_all_covers_every_post_and_case() {
        let routes = Route::all();
        assert_eq!(routes.len(), 4 + POSTS.len() + CASES.len());
        for post in POSTS {
            assert!(routes.contains(&Route::Post(post.slug.to_owned())));
        }
        for case in CASES {
            assert!(routes.contains(&Route::Case(case.slug.to_owned())));
        }
    }

    #[test]
    fn test_all_paths_unique() {
        let routes = Route::all();
        for (i, a) in routes.iter().enumerate() {
            for b in &routes[i + 1..] {
                assert_ne!(a.path(), b.path());
            }
        }
    }
}
