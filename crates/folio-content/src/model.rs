//! Content data types.
//!
//! Every type holds `'static` borrowed data; instances live in the static
//! tables of the sibling modules.

/// A blog post.
///
/// `body` is written in the restricted markdown subset and rendered by
/// `folio-renderer`. `date` is an ISO `YYYY-MM-DD` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Post {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub date: &'static str,
    pub body: &'static str,
}

/// A labeled external link (repository, live demo, contact target).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// A titled rationale within a case study's decision log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub title: &'static str,
    pub rationale: &'static str,
}

/// A case study: one project told as problem, constraints, solution,
/// decisions, and outcome. All prose fields are plain text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub tech_stack: &'static [&'static str],
    pub links: &'static [ExternalLink],
    pub problem: &'static str,
    pub constraints: &'static [&'static str],
    pub solution: &'static str,
    pub decisions: &'static [Decision],
    pub outcome: &'static str,
}

/// A focus area shown on the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusArea {
    pub title: &'static str,
    pub description: &'static str,
}

/// A working-environment preference shown on the hire page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkPreference {
    pub title: &'static str,
    pub description: &'static str,
}

/// A contact channel shown in the footer and on the hire page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub href: &'static str,
    /// Short display text (an address or handle).
    pub handle: &'static str,
}
