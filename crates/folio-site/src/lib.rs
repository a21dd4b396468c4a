//! Site structure and page rendering for Folio.
//!
//! This crate assembles full HTML pages from the static content store and
//! the content renderer:
//! - [`Route`]: the closed set of site routes
//! - [`Site`]: renders a route to a complete HTML document
//!
//! # Quick Start
//!
//! ```
//! use folio_site::{Route, Site};
//!
//! let site = Site::new("Vladyslav Kovalchuk", "https://vladkovalchuk.dev");
//! let page = site.render(&Route::Blog)?;
//! assert!(page.html.contains("<title>"));
//! # Ok::<(), folio_site::RenderError>(())
//! ```

mod layout;
mod pages;
mod route;
mod site;

pub use route::Route;
pub use site::{RenderError, RenderedPage, Site};
