//! `[site]` configuration.
//!
//! Basic site information shared by every generated tag: URL, name, author,
//! description, and the language/locale pair.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Field paths for `[site]` diagnostics.
pub struct SiteInfoFields {
    pub url: FieldPath,
    pub name: FieldPath,
    pub author: FieldPath,
    pub language: FieldPath,
    pub locale: FieldPath,
}

/// Site metadata consumed by the meta tag and structured data generators.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site URL (e.g., "https://docs.example.com"); may include a path prefix.
    pub url: Option<String>,

    /// Site name, appended to page titles.
    pub name: String,

    /// Default author for articles.
    pub author: String,

    /// Site description.
    pub description: String,

    /// Document language code for `<html lang>` (e.g., "zh-CN").
    pub language: String,

    /// Open Graph locale (e.g., "zh_CN").
    pub locale: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            url: None,
            name: String::new(),
            author: String::new(),
            description: String::new(),
            language: "zh-CN".into(),
            locale: "zh_CN".into(),
        }
    }
}

impl SiteInfoConfig {
    pub const FIELDS: SiteInfoFields = SiteInfoFields {
        url: FieldPath::new("site.url"),
        name: FieldPath::new("site.name"),
        author: FieldPath::new("site.author"),
        language: FieldPath::new("site.language"),
        locale: FieldPath::new("site.locale"),
    };

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be set: every generated URL is absolute
    /// - `url` must be a valid `http`/`https` URL with a host
    /// - `name` must not be empty
    /// - empty `author`/`description` only warn
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match &self.url {
            None => diag.error_with_hint(
                Self::FIELDS.url,
                "site URL is not configured",
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            ),
            Some(url_str) => match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                    if parsed.query().is_some() || parsed.fragment().is_some() {
                        diag.error(
                            Self::FIELDS.url,
                            "URL must not contain a query string or fragment",
                        );
                    }
                }
                Err(e) => diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                ),
            },
        }

        if self.name.trim().is_empty() {
            diag.error(Self::FIELDS.name, "site name must not be empty");
        }
        if self.author.trim().is_empty() {
            diag.warn(
                Self::FIELDS.author,
                "empty, articles without an author get an empty article:author",
            );
        }
        if self.language.trim().is_empty() {
            diag.error(Self::FIELDS.language, "language code must not be empty");
        }
        if self.locale.trim().is_empty() {
            diag.error(Self::FIELDS.locale, "locale must not be empty");
        }
    }
}
