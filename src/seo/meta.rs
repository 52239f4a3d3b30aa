//! Page meta tags: title, description, Open Graph, Twitter Card, canonical.
//!
//! [`generate`] is a pure function from [`SeoOptions`] plus the ambient
//! [`SiteDefaults`] and current route to a [`SeoMeta`] document. Attaching
//! it to a page is left to [`HeadDocument`](super::HeadDocument).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SiteDefaults;
use crate::config::TwitterCard;

/// Open Graph object type of a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    #[default]
    Website,
    Article,
}

impl PageKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-page SEO input. Every field is optional; empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub kind: PageKind,
    pub author: Option<String>,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub section: Option<String>,
}

/// `Some` only for non-empty strings.
#[inline]
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl SeoOptions {
    pub fn title(&self) -> Option<&str> {
        present(&self.title)
    }

    pub fn description(&self) -> Option<&str> {
        present(&self.description)
    }

    pub fn image(&self) -> Option<&str> {
        present(&self.image)
    }

    pub fn author(&self) -> Option<&str> {
        present(&self.author)
    }
}

// ============================================================================
// Output document
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    pub image_alt: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: PageKind,
    pub site_name: String,
    pub locale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterMeta {
    pub card: TwitterCard,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    pub image_alt: String,
}

/// Article-only Open Graph fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// Generated metadata for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMeta {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Comma-joined keyword list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<ArticleMeta>,
    pub canonical: String,
    pub lang: String,
}

/// Attribute a `<meta>` tag keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// A single `<meta>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: &'static str,
    pub content: String,
}

impl MetaTag {
    fn name(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Name,
            key,
            content: content.into(),
        }
    }

    fn property(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Property,
            key,
            content: content.into(),
        }
    }
}

impl SeoMeta {
    /// Flatten into `<meta>` tags in emission order.
    pub fn tags(&self) -> Vec<MetaTag> {
        let mut tags = Vec::with_capacity(20);

        if let Some(description) = &self.description {
            tags.push(MetaTag::name("description", description));
        }
        if let Some(keywords) = &self.keywords {
            tags.push(MetaTag::name("keywords", keywords));
        }

        let og = &self.open_graph;
        tags.push(MetaTag::property("og:title", &og.title));
        if let Some(description) = &og.description {
            tags.push(MetaTag::property("og:description", description));
        }
        tags.push(MetaTag::property("og:image", &og.image));
        tags.push(MetaTag::property("og:image:alt", &og.image_alt));
        tags.push(MetaTag::property("og:url", &og.url));
        tags.push(MetaTag::property("og:type", og.kind.as_str()));
        tags.push(MetaTag::property("og:site_name", &og.site_name));
        tags.push(MetaTag::property("og:locale", &og.locale));

        let tw = &self.twitter;
        tags.push(MetaTag::name("twitter:card", tw.card.as_str()));
        tags.push(MetaTag::name("twitter:title", &tw.title));
        if let Some(description) = &tw.description {
            tags.push(MetaTag::name("twitter:description", description));
        }
        tags.push(MetaTag::name("twitter:image", &tw.image));
        tags.push(MetaTag::name("twitter:image:alt", &tw.image_alt));

        if let Some(article) = &self.article {
            if let Some(time) = &article.published_time {
                tags.push(MetaTag::property("article:published_time", time));
            }
            if let Some(time) = &article.modified_time {
                tags.push(MetaTag::property("article:modified_time", time));
            }
            for author in &article.authors {
                tags.push(MetaTag::property("article:author", author));
            }
            if let Some(section) = &article.section {
                tags.push(MetaTag::property("article:section", section));
            }
        }

        tags
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Build the metadata document for the page at `path`.
pub fn generate(options: &SeoOptions, defaults: &SiteDefaults, path: &str) -> SeoMeta {
    let image_url = defaults.image_url(options.image());
    let page_url = defaults.page_url(path);

    let title = options.title();
    let full_title = match title {
        Some(title) => format!("{title} - {}", defaults.site_name),
        None => defaults.site_name.clone(),
    };
    let short_title = title.unwrap_or(&defaults.site_name).to_string();
    let description = options.description().map(str::to_string);

    let keywords = (!options.keywords.is_empty()).then(|| options.keywords.join(","));

    let article = (options.kind == PageKind::Article).then(|| ArticleMeta {
        published_time: present(&options.published_time).map(str::to_string),
        modified_time: present(&options.modified_time).map(str::to_string),
        authors: vec![options.author().unwrap_or(&defaults.author).to_string()],
        section: present(&options.section).map(str::to_string),
    });

    SeoMeta {
        title: full_title,
        description: description.clone(),
        keywords,
        open_graph: OpenGraph {
            title: short_title.clone(),
            description: description.clone(),
            image: image_url.clone(),
            image_alt: short_title.clone(),
            url: page_url.clone(),
            kind: options.kind,
            site_name: defaults.site_name.clone(),
            locale: defaults.locale.clone(),
        },
        twitter: TwitterMeta {
            card: defaults.twitter_card,
            title: short_title.clone(),
            description,
            image: image_url,
            image_alt: short_title,
        },
        article,
        canonical: page_url,
        lang: defaults.language.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::defaults::test_defaults;

    fn article(title: &str) -> SeoOptions {
        SeoOptions {
            title: Some(title.into()),
            kind: PageKind::Article,
            published_time: Some("2024-05-01".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_options() {
        let defaults = test_defaults();
        let meta = generate(&SeoOptions::default(), &defaults, "/");

        assert_eq!(meta.title, "Process Docs");
        assert_eq!(meta.description, None);
        assert_eq!(meta.keywords, None);
        assert_eq!(meta.open_graph.title, "Process Docs");
        assert_eq!(meta.open_graph.image, defaults.default_image);
        assert_eq!(meta.open_graph.image_alt, "Process Docs");
        assert_eq!(meta.open_graph.kind, PageKind::Website);
        assert_eq!(meta.open_graph.locale, "zh_CN");
        assert_eq!(meta.twitter.card, TwitterCard::SummaryLargeImage);
        assert_eq!(meta.canonical, "https://docs.example.com/");
        assert_eq!(meta.lang, "zh-CN");
        assert!(meta.article.is_none());
    }

    #[test]
    fn test_full_title() {
        let options = SeoOptions {
            title: Some("Install".into()),
            ..Default::default()
        };
        let meta = generate(&options, &test_defaults(), "/install");
        assert_eq!(meta.title, "Install - Process Docs");
        assert_eq!(meta.open_graph.title, "Install");
        assert_eq!(meta.twitter.title, "Install");
        assert_eq!(meta.twitter.image_alt, "Install");
    }

    #[test]
    fn test_empty_title_falls_back() {
        let options = SeoOptions {
            title: Some(String::new()),
            image: Some(String::new()),
            ..Default::default()
        };
        let defaults = test_defaults();
        let meta = generate(&options, &defaults, "/");
        assert_eq!(meta.title, "Process Docs");
        assert_eq!(meta.open_graph.image, defaults.default_image);
    }

    #[test]
    fn test_image_resolution() {
        let defaults = test_defaults();

        let relative = SeoOptions {
            image: Some("/images/arch.png".into()),
            ..Default::default()
        };
        let meta = generate(&relative, &defaults, "/");
        assert_eq!(meta.open_graph.image, "https://docs.example.com/images/arch.png");
        assert_eq!(meta.twitter.image, meta.open_graph.image);

        let absolute = SeoOptions {
            image: Some("https://cdn.example.com/a.png".into()),
            ..Default::default()
        };
        let meta = generate(&absolute, &defaults, "/");
        assert_eq!(meta.open_graph.image, "https://cdn.example.com/a.png");
    }

    #[test]
    fn test_keywords_joined() {
        let options = SeoOptions {
            keywords: vec!["java".into(), "spring boot".into(), "vue".into()],
            ..Default::default()
        };
        let meta = generate(&options, &test_defaults(), "/");
        assert_eq!(meta.keywords.as_deref(), Some("java,spring boot,vue"));
    }

    #[test]
    fn test_page_url_from_path() {
        let meta = generate(&SeoOptions::default(), &test_defaults(), "/backend/setup");
        assert_eq!(meta.open_graph.url, "https://docs.example.com/backend/setup");
        assert_eq!(meta.canonical, meta.open_graph.url);
    }

    #[test]
    fn test_article_fields_only_for_articles() {
        let mut options = article("Release");
        options.modified_time = Some("2024-06-01".into());
        options.section = Some("backend".into());
        options.kind = PageKind::Website;

        let meta = generate(&options, &test_defaults(), "/release");
        assert!(meta.article.is_none());
        assert!(meta.tags().iter().all(|t| !t.key.starts_with("article:")));
    }

    #[test]
    fn test_article_fields() {
        let mut options = article("Release");
        options.modified_time = Some("2024-06-01".into());
        options.section = Some("backend".into());
        options.author = Some("Bob".into());

        let meta = generate(&options, &test_defaults(), "/release");
        let article = meta.article.unwrap();
        assert_eq!(article.published_time.as_deref(), Some("2024-05-01"));
        assert_eq!(article.modified_time.as_deref(), Some("2024-06-01"));
        assert_eq!(article.authors, vec!["Bob"]);
        assert_eq!(article.section.as_deref(), Some("backend"));
        assert_eq!(meta.open_graph.kind, PageKind::Article);
    }

    #[test]
    fn test_article_author_falls_back_to_site_author() {
        let meta = generate(&article("Release"), &test_defaults(), "/release");
        let article = meta.article.unwrap();
        assert_eq!(article.authors, vec!["Alice"]);
        assert_eq!(article.modified_time, None);
        assert_eq!(article.section, None);
    }

    #[test]
    fn test_tags_order_and_attrs() {
        let options = SeoOptions {
            title: Some("Intro".into()),
            description: Some("Getting started".into()),
            ..article("Intro")
        };
        let meta = generate(&options, &test_defaults(), "/intro");
        let tags = meta.tags();
        let keys: Vec<_> = tags.iter().map(|t| t.key).collect();

        assert_eq!(keys[0], "description");
        assert_eq!(keys[1], "og:title");
        assert!(keys.contains(&"twitter:card"));
        assert_eq!(keys.last(), Some(&"article:author"));

        let og_type = tags.iter().find(|t| t.key == "og:type").unwrap();
        assert_eq!(og_type.attr, MetaAttr::Property);
        assert_eq!(og_type.content, "article");

        let card = tags.iter().find(|t| t.key == "twitter:card").unwrap();
        assert_eq!(card.attr, MetaAttr::Name);
        assert_eq!(card.content, "summary_large_image");
    }

    #[test]
    fn test_options_deserialize() {
        let json = r#"{"title":"T","keywords":["a"],"type":"article","publishedTime":"2024-01-01"}"#;
        let options: SeoOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.kind, PageKind::Article);
        assert_eq!(options.published_time.as_deref(), Some("2024-01-01"));
        assert_eq!(options.keywords, vec!["a"]);
    }
}
