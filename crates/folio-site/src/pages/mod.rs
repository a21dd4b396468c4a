//! Page templates.
//!
//! Each template produces the `<main>` body for one route plus the title
//! and meta description for the document head. Body markup interpolates
//! content-store text through `escape_html`; rendered post bodies are
//! embedded as-is.

pub(crate) mod blog;
pub(crate) mod cases;
pub(crate) mod hire;
pub(crate) mod home;

/// Body and head metadata for one page.
pub(crate) struct PageContent {
    pub title: String,
    pub description: String,
    pub body: String,
}
