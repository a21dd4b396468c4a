//! Line-based content renderer for the restricted markdown subset used by
//! blog posts.
//!
//! The renderer converts a small, fixed grammar to HTML:
//!
//! - ` ``` ` fence lines toggle a literal code block (`<pre><code>`)
//! - `## ` prefixes become `<h2>` headings
//! - `- ` prefixes become `<li>` items
//! - blank lines separate blocks without emitting anything
//! - everything else becomes a `<p>` paragraph
//! - `` `x` `` and `**x**` become `<code>` and `<strong>` spans
//!
//! Nothing else is recognized; unsupported markdown passes through as
//! literal paragraph text. Code block content is HTML-escaped, normal-mode
//! content is not — the content source is trusted, author-controlled data
//! (see [`render`] for details).
//!
//! # Example
//!
//! ```
//! use folio_renderer::render;
//!
//! let html = render("## Title\n\nUse `render` to convert **content**.");
//! assert_eq!(
//!     html,
//!     "<h2>Title</h2><p>Use <code>render</code> to convert \
//!      <strong>content</strong>.</p>"
//! );
//! ```

mod escape;
mod inline;
mod renderer;

pub use escape::{escape_code, escape_html};
pub use inline::format_inline;
pub use renderer::{ContentRenderer, render};
