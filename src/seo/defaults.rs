//! Ambient site defaults shared by both generators.

use crate::config::{SEARCH_TERM_PLACEHOLDER, SiteConfig, TwitterCard};

use super::url::{absolute_url, join};

/// Read-only site-level defaults, built once per process.
///
/// Invariants: `site_url` has no trailing slash; `default_image`, `logo`
/// and `search_template` are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDefaults {
    pub site_url: String,
    pub site_name: String,
    pub author: String,
    /// Site description, empty when not configured.
    pub description: String,
    pub default_image: String,
    pub logo: String,
    /// Open Graph locale (`zh_CN`).
    pub locale: String,
    /// Document language (`zh-CN`).
    pub language: String,
    /// Search action URL template carrying `{search_term_string}`.
    pub search_template: String,
    pub twitter_card: TwitterCard,
}

impl SiteDefaults {
    /// Create defaults for a site with the stock image, logo and locale.
    pub fn new(
        site_url: impl Into<String>,
        site_name: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        let site_url = site_url.into().trim_end_matches('/').to_string();
        Self {
            default_image: join(&site_url, "/images/og-default.png"),
            logo: join(&site_url, "/favicon.ico"),
            search_template: join(&site_url, &format!("/?search={SEARCH_TERM_PLACEHOLDER}")),
            site_url,
            site_name: site_name.into(),
            author: author.into(),
            description: String::new(),
            locale: "zh_CN".into(),
            language: "zh-CN".into(),
            twitter_card: TwitterCard::default(),
        }
    }

    /// Build defaults from a validated site configuration.
    pub fn from_config(config: &SiteConfig) -> Self {
        let site = &config.site;
        let seo = &config.seo;

        Self::new(
            site.url.as_deref().unwrap_or_default(),
            site.name.trim(),
            &site.author,
        )
        .with_description(&site.description)
        .with_default_image(&seo.default_image)
        .with_logo(&seo.logo)
        .with_search_path(&seo.search_path)
        .with_locale(&site.locale, &site.language)
        .with_twitter_card(seo.twitter_card)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the fallback image (relative to the site URL, or absolute).
    pub fn with_default_image(mut self, image: &str) -> Self {
        self.default_image = absolute_url(&self.site_url, image);
        self
    }

    /// Set the publisher logo (relative to the site URL, or absolute).
    pub fn with_logo(mut self, logo: &str) -> Self {
        self.logo = absolute_url(&self.site_url, logo);
        self
    }

    pub fn with_search_path(mut self, path: &str) -> Self {
        self.search_template = join(&self.site_url, path);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>, language: impl Into<String>) -> Self {
        self.locale = locale.into();
        self.language = language.into();
        self
    }

    pub fn with_twitter_card(mut self, card: TwitterCard) -> Self {
        self.twitter_card = card;
        self
    }

    /// Absolute URL of a page route.
    pub fn page_url(&self, path: &str) -> String {
        join(&self.site_url, path)
    }

    /// Resolve an optional image, falling back to the default image.
    pub fn image_url(&self, image: Option<&str>) -> String {
        match image {
            Some(image) => absolute_url(&self.site_url, image),
            None => self.default_image.clone(),
        }
    }

    /// Site description, `None` when not configured.
    pub fn description(&self) -> Option<&str> {
        Some(self.description.as_str()).filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
pub(crate) fn test_defaults() -> SiteDefaults {
    SiteDefaults::new("https://docs.example.com", "Process Docs", "Alice")
}
