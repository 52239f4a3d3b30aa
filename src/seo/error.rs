//! SEO generation errors.

use thiserror::Error;

/// Errors raised while turning page data into structured data payloads.
///
/// The generators themselves are total; these come from parsing schema
/// names and assembling payloads from loosely typed input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeoError {
    #[error("unknown structured data schema `{0}`, expected one of: website, blogPosting, article, breadcrumb")]
    UnknownSchema(String),

    #[error("{schema} requires `{field}`")]
    MissingField {
        schema: &'static str,
        field: &'static str,
    },

    #[error("invalid breadcrumb item `{0}`, expected NAME=URL")]
    InvalidBreadcrumb(String),
}
