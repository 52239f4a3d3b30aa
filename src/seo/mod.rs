//! SEO metadata and structured data generation.
//!
//! ```text
//! seo/
//! ├── defaults.rs   # SiteDefaults (site URL, name, author, stock assets)
//! ├── meta.rs       # <meta> document: Open Graph, Twitter Card, article:*
//! ├── jsonld.rs     # schema.org JSON-LD payloads
//! ├── head.rs       # HeadDocument: render / inject into HTML
//! ├── url.rs        # absolute URL resolution
//! └── error.rs      # SeoError
//! ```
//!
//! Both generators are pure functions of their inputs and the site
//! defaults; nothing here touches the filesystem.

pub mod defaults;
mod error;
pub mod head;
pub mod jsonld;
pub mod meta;
pub mod url;

pub use defaults::SiteDefaults;
pub use error::SeoError;
pub use head::HeadDocument;
pub use jsonld::{BreadcrumbItem, JsonLd, Posting, SchemaKind, StructuredData, WebSite};
pub use meta::{MetaAttr, MetaTag, PageKind, SeoMeta, SeoOptions};
