//! JSON-LD structured data (schema.org).
//!
//! Payloads are a closed sum type ([`JsonLd`]), so every schema the site
//! emits is known at compile time. Schema names coming from text (front
//! matter, CLI) go through [`SchemaKind::from_str`], which rejects unknown
//! names instead of producing an empty object.
//!
//! # Output shapes
//!
//! | Payload          | `@type`          | Notes                                         |
//! |------------------|------------------|-----------------------------------------------|
//! | `WebSite`        | `WebSite`        | with a `SearchAction` on the site search URL  |
//! | `BlogPosting`    | `BlogPosting`    | author `Person`, publisher `Organization`     |
//! | `Article`        | `Article`        | same shape as `BlogPosting`                   |
//! | `Breadcrumb`     | `BreadcrumbList` | `ListItem` positions are 1-based              |

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::meta::present;
use super::{SeoError, SiteDefaults};

const SCHEMA_CONTEXT: &str = "https://schema.org";

// ============================================================================
// Payloads
// ============================================================================

/// Name of a structured data schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Website,
    BlogPosting,
    Article,
    Breadcrumb,
}

impl SchemaKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::BlogPosting => "blogPosting",
            Self::Article => "article",
            Self::Breadcrumb => "breadcrumb",
        }
    }
}

impl FromStr for SchemaKind {
    type Err = SeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "website" | "WebSite" => Ok(Self::Website),
            "blogPosting" | "blog-posting" | "BlogPosting" => Ok(Self::BlogPosting),
            "article" | "Article" => Ok(Self::Article),
            "breadcrumb" | "BreadcrumbList" => Ok(Self::Breadcrumb),
            other => Err(SeoError::UnknownSchema(other.to_string())),
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Website payload. Every field falls back to site defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebSite {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

/// Blog posting / article payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Posting {
    pub headline: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub date_published: Option<String>,
    pub date_modified: Option<String>,
    pub author: Option<String>,
    /// Explicit `mainEntityOfPage` id; defaults to the current page URL.
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    pub name: String,
    pub url: String,
}

impl BreadcrumbItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

impl FromStr for BreadcrumbItem {
    type Err = SeoError;

    /// Parse `NAME=URL`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((name, url)) if !name.trim().is_empty() && !url.trim().is_empty() => {
                Ok(Self::new(name.trim(), url.trim()))
            }
            _ => Err(SeoError::InvalidBreadcrumb(s.to_string())),
        }
    }
}

/// Structured data payload, one variant per schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonLd {
    Website(WebSite),
    BlogPosting(Posting),
    Article(Posting),
    Breadcrumb(Vec<BreadcrumbItem>),
}

impl JsonLd {
    pub const fn kind(&self) -> SchemaKind {
        match self {
            Self::Website(_) => SchemaKind::Website,
            Self::BlogPosting(_) => SchemaKind::BlogPosting,
            Self::Article(_) => SchemaKind::Article,
            Self::Breadcrumb(_) => SchemaKind::Breadcrumb,
        }
    }
}

// ============================================================================
// Output document
// ============================================================================

/// One JSON-LD document, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuredData {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(flatten)]
    pub schema: Schema,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type")]
pub enum Schema {
    WebSite(WebSiteSchema),
    BlogPosting(PostingSchema),
    Article(PostingSchema),
    BreadcrumbList(BreadcrumbListSchema),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSiteSchema {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    pub potential_action: SearchAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub target: EntryPoint,
    #[serde(rename = "query-input")]
    pub query_input: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPoint {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub url_template: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingSchema {
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    pub author: Person,
    pub publisher: Organization,
    pub main_entity_of_page: WebPage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
    pub logo: ImageObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebPage {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbListSchema {
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub position: usize,
    pub name: String,
    pub item: String,
}

impl StructuredData {
    /// Compact JSON text.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Build the JSON-LD document for `payload` on the page at `path`.
pub fn generate(payload: &JsonLd, defaults: &SiteDefaults, path: &str) -> StructuredData {
    let schema = match payload {
        JsonLd::Website(site) => Schema::WebSite(website(site, defaults)),
        JsonLd::BlogPosting(post) => Schema::BlogPosting(posting(post, defaults, path)),
        JsonLd::Article(post) => Schema::Article(posting(post, defaults, path)),
        JsonLd::Breadcrumb(items) => Schema::BreadcrumbList(breadcrumb(items)),
    };

    StructuredData {
        context: SCHEMA_CONTEXT,
        schema,
    }
}

fn website(site: &WebSite, defaults: &SiteDefaults) -> WebSiteSchema {
    WebSiteSchema {
        name: present(&site.name).unwrap_or(&defaults.site_name).to_string(),
        description: present(&site.description)
            .or_else(|| defaults.description())
            .map(str::to_string),
        url: present(&site.url).unwrap_or(&defaults.site_url).to_string(),
        potential_action: SearchAction {
            kind: "SearchAction",
            target: EntryPoint {
                kind: "EntryPoint",
                url_template: defaults.search_template.clone(),
            },
            query_input: "required name=search_term_string",
        },
    }
}

fn posting(post: &Posting, defaults: &SiteDefaults, path: &str) -> PostingSchema {
    let date_published = present(&post.date_published).map(str::to_string);
    let date_modified = present(&post.date_modified)
        .map(str::to_string)
        .or_else(|| date_published.clone());

    PostingSchema {
        headline: post.headline.clone(),
        description: present(&post.description).map(str::to_string),
        image: defaults.image_url(present(&post.image)),
        date_published,
        date_modified,
        author: Person {
            kind: "Person",
            name: present(&post.author).unwrap_or(&defaults.author).to_string(),
        },
        publisher: Organization {
            kind: "Organization",
            name: defaults.site_name.clone(),
            logo: ImageObject {
                kind: "ImageObject",
                url: defaults.logo.clone(),
            },
        },
        main_entity_of_page: WebPage {
            kind: "WebPage",
            id: present(&post.url)
                .map(str::to_string)
                .unwrap_or_else(|| defaults.page_url(path)),
        },
    }
}

fn breadcrumb(items: &[BreadcrumbItem]) -> BreadcrumbListSchema {
    BreadcrumbListSchema {
        item_list_element: items
            .iter()
            .enumerate()
            .map(|(index, item)| ListItem {
                kind: "ListItem",
                position: index + 1,
                name: item.name.clone(),
                item: item.url.clone(),
            })
            .collect(),
    }
}
