//! docseo - SEO meta tags and JSON-LD structured data for static documentation sites.
//!
//! ```text
//! content/*.md, *.yml ──► page (front matter, route) ──► seo (meta, JSON-LD)
//!                                                          │
//!                                  HeadDocument ◄──────────┘
//!                                       │
//!                    <output>/<route>/index.html or head.html
//! ```
//!
//! The generators in [`seo`] are pure: they take per-page options, the
//! current route and read-only [`seo::SiteDefaults`], and return documents.
//! Everything that touches the filesystem lives in [`cli`] and [`page`].

pub mod cli;
pub mod config;
pub mod logger;
pub mod page;
pub mod seo;
pub mod utils;
