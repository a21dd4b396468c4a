//! In-memory content store for the portfolio site.
//!
//! All content is compiled into the binary as static data: blog posts,
//! case studies, and the profile tables used by the home and hire pages.
//! The store is read-only; lookups by slug return borrowed references.
//!
//! Post bodies use the restricted markdown subset handled by
//! `folio-renderer`. Metadata (title, summary, date) is passed through to
//! the presentation layer without further processing here.

mod cases;
mod date;
mod model;
mod posts;
mod profile;

pub use cases::{CASES, case_by_slug};
pub use date::format_date;
pub use model::{CaseStudy, ContactChannel, Decision, ExternalLink, FocusArea, Post, WorkPreference};
pub use posts::{POSTS, post_by_slug};
pub use profile::{BEST_WITH, CONTACTS, FOCUS_AREAS, PROFILE, Profile, TECH_STACK};
