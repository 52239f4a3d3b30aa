//! Configuration sections of `docseo.toml`.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://process-card-docs.example.com"
//! name = "Process Docs"
//! author = "Alice"
//! description = "Backend, frontend and architecture guides"
//!
//! [seo]
//! default_image = "/images/og-default.png"
//! breadcrumbs = true
//!
//! [build]
//! content = "content"
//! output = ".output"
//! ```

mod build;
mod seo;
mod site;

pub use build::BuildSectionConfig;
pub use seo::{SEARCH_TERM_PLACEHOLDER, SeoConfig, TwitterCard};
pub use site::SiteInfoConfig;
