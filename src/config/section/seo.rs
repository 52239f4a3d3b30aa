//! `[seo]` configuration (default image, logo, search action, Twitter card).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Placeholder the search action template must carry.
pub const SEARCH_TERM_PLACEHOLDER: &str = "{search_term_string}";

/// Twitter card style
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCard {
    Summary,
    /// Large image summary (default).
    #[default]
    SummaryLargeImage,
    App,
    Player,
}

impl TwitterCard {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::SummaryLargeImage => "summary_large_image",
            Self::App => "app",
            Self::Player => "player",
        }
    }
}

impl fmt::Display for TwitterCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field paths for `[seo]` diagnostics.
pub struct SeoFields {
    pub default_image: FieldPath,
    pub logo: FieldPath,
    pub search_path: FieldPath,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    /// Fallback social preview image (relative to site URL, or absolute).
    pub default_image: String,

    /// Publisher logo for structured data (relative to site URL, or absolute).
    pub logo: String,

    /// Search action path appended to the site URL.
    pub search_path: String,

    pub twitter_card: TwitterCard,

    /// Emit a breadcrumb trail for every non-root page.
    pub breadcrumbs: bool,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            default_image: "/images/og-default.png".into(),
            logo: "/favicon.ico".into(),
            search_path: format!("/?search={SEARCH_TERM_PLACEHOLDER}"),
            twitter_card: TwitterCard::default(),
            breadcrumbs: false,
        }
    }
}

impl SeoConfig {
    pub const FIELDS: SeoFields = SeoFields {
        default_image: FieldPath::new("seo.default_image"),
        logo: FieldPath::new("seo.logo"),
        search_path: FieldPath::new("seo.search_path"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.search_path.contains(SEARCH_TERM_PLACEHOLDER) {
            diag.error_with_hint(
                Self::FIELDS.search_path,
                format!("search path must contain {SEARCH_TERM_PLACEHOLDER}"),
                format!("e.g.: \"/?search={SEARCH_TERM_PLACEHOLDER}\""),
            );
        }
        if self.default_image.trim().is_empty() {
            diag.error(Self::FIELDS.default_image, "default image must not be empty");
        }
        if self.logo.trim().is_empty() {
            diag.error(Self::FIELDS.logo, "logo must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let seo = SeoConfig::default();
        assert_eq!(seo.default_image, "/images/og-default.png");
        assert_eq!(seo.logo, "/favicon.ico");
        assert_eq!(seo.search_path, "/?search={search_term_string}");
        assert_eq!(seo.twitter_card, TwitterCard::SummaryLargeImage);
        assert!(!seo.breadcrumbs);
    }

    #[test]
    fn test_twitter_card_parse() {
        let seo: SeoConfig = toml::from_str("twitter_card = \"summary\"").unwrap();
        assert_eq!(seo.twitter_card.as_str(), "summary");

        let result: Result<SeoConfig, _> = toml::from_str("twitter_card = \"huge\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_search_path_requires_placeholder() {
        let seo = SeoConfig {
            search_path: "/search".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        seo.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, SeoConfig::FIELDS.search_path);
    }
}
