//! Front matter to SEO inputs.
//!
//! Maps a page's metadata onto [`SeoOptions`] and the list of JSON-LD
//! payloads it carries:
//!
//! | Front matter   | SEO input                          |
//! |----------------|------------------------------------|
//! | `date`         | `published_time`, marks an article |
//! | `updatedDate`  | `modified_time`                    |
//! | `category`     | `section`                          |
//! | `config.schema`| JSON-LD schema override            |

use rustc_hash::FxHashMap;

use crate::seo::{
    BreadcrumbItem, HeadDocument, JsonLd, PageKind, Posting, SchemaKind, SeoError, SeoMeta,
    SeoOptions, SiteDefaults, StructuredData, WebSite, jsonld, meta,
};

use super::PageMeta;
use super::route::{segment_label, segments};

/// Front matter key under `config` that selects the schema.
const SCHEMA_KEY: &str = "schema";

/// Shared inputs for mapping pages.
#[derive(Debug, Clone, Copy)]
pub struct SeoContext<'a> {
    pub defaults: &'a SiteDefaults,
    /// Attach a breadcrumb trail to every non-root page.
    pub breadcrumbs: bool,
    /// Known page titles by route, used to name breadcrumb segments.
    pub titles: Option<&'a FxHashMap<String, String>>,
}

impl<'a> SeoContext<'a> {
    pub fn new(defaults: &'a SiteDefaults) -> Self {
        Self {
            defaults,
            breadcrumbs: false,
            titles: None,
        }
    }

    pub fn with_breadcrumbs(mut self, enabled: bool) -> Self {
        self.breadcrumbs = enabled;
        self
    }

    pub fn with_titles(mut self, titles: &'a FxHashMap<String, String>) -> Self {
        self.titles = Some(titles);
        self
    }
}

/// SEO inputs for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSeo {
    pub route: String,
    pub options: SeoOptions,
    pub json_ld: Vec<JsonLd>,
}

impl PageSeo {
    pub fn from_meta(meta: &PageMeta, route: &str, ctx: &SeoContext<'_>) -> Result<Self, SeoError> {
        let options = SeoOptions {
            title: meta.title.clone(),
            description: meta.description.clone(),
            keywords: meta.keywords.clone(),
            image: meta.image.clone(),
            kind: if meta.date.is_some() {
                PageKind::Article
            } else {
                PageKind::Website
            },
            author: meta.author.clone(),
            published_time: meta.date.clone(),
            modified_time: meta.updated_date.clone(),
            section: meta.category.clone(),
        };

        let schema = match meta.config_str(SCHEMA_KEY) {
            Some(name) => Some(name.parse::<SchemaKind>()?),
            None if route == "/" => Some(SchemaKind::Website),
            None if meta.date.is_some() => Some(SchemaKind::BlogPosting),
            None => None,
        };

        let mut json_ld = Vec::with_capacity(2);
        if let Some(schema) = schema {
            json_ld.push(payload(schema, meta, route, ctx)?);
        }
        if ctx.breadcrumbs && route != "/" && schema != Some(SchemaKind::Breadcrumb) {
            json_ld.push(JsonLd::Breadcrumb(breadcrumb_trail(meta, route, ctx)));
        }

        Ok(Self {
            route: route.to_string(),
            options,
            json_ld,
        })
    }

    pub fn meta(&self, defaults: &SiteDefaults) -> SeoMeta {
        meta::generate(&self.options, defaults, &self.route)
    }

    pub fn structured_data(&self, defaults: &SiteDefaults) -> Vec<StructuredData> {
        self.json_ld
            .iter()
            .map(|payload| jsonld::generate(payload, defaults, &self.route))
            .collect()
    }

    /// Assemble the page's head document.
    pub fn head(&self, defaults: &SiteDefaults) -> serde_json::Result<HeadDocument> {
        let mut head = HeadDocument::new();
        head.set_meta(self.meta(defaults));
        for data in self.structured_data(defaults) {
            head.push_json_ld(&data)?;
        }
        Ok(head)
    }
}

fn payload(
    schema: SchemaKind,
    meta: &PageMeta,
    route: &str,
    ctx: &SeoContext<'_>,
) -> Result<JsonLd, SeoError> {
    let payload = match schema {
        SchemaKind::Website => JsonLd::Website(WebSite {
            name: None,
            description: meta.description.clone(),
            url: None,
        }),
        SchemaKind::BlogPosting => JsonLd::BlogPosting(posting(meta, "BlogPosting")?),
        SchemaKind::Article => JsonLd::Article(posting(meta, "Article")?),
        SchemaKind::Breadcrumb => JsonLd::Breadcrumb(breadcrumb_trail(meta, route, ctx)),
    };
    Ok(payload)
}

fn posting(meta: &PageMeta, schema: &'static str) -> Result<Posting, SeoError> {
    let headline = meta
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or(SeoError::MissingField {
            schema,
            field: "title",
        })?;

    Ok(Posting {
        headline: headline.to_string(),
        description: meta.description.clone(),
        image: meta.image.clone(),
        date_published: meta.date.clone(),
        date_modified: meta.updated_date.clone(),
        author: meta.author.clone(),
        url: None,
    })
}

/// Home, then one item per route prefix; the last is named by the page title.
fn breadcrumb_trail(meta: &PageMeta, route: &str, ctx: &SeoContext<'_>) -> Vec<BreadcrumbItem> {
    let defaults = ctx.defaults;
    let mut items = vec![BreadcrumbItem::new(&defaults.site_name, defaults.page_url("/"))];

    let parts: Vec<&str> = segments(route).collect();
    let mut prefix = String::with_capacity(route.len());
    for (i, segment) in parts.iter().enumerate() {
        prefix.push('/');
        prefix.push_str(segment);

        let is_last = i + 1 == parts.len();
        let known = if is_last {
            meta.title.as_deref().filter(|t| !t.is_empty())
        } else {
            ctx.titles.and_then(|titles| titles.get(&prefix)).map(String::as_str)
        };
        let name = known.map_or_else(|| segment_label(segment), str::to_string);

        items.push(BreadcrumbItem::new(name, defaults.page_url(&prefix)));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::defaults::test_defaults;

    fn meta(yaml: &str) -> PageMeta {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn map(meta: &PageMeta, route: &str) -> Result<PageSeo, SeoError> {
        let defaults = test_defaults();
        PageSeo::from_meta(meta, route, &SeoContext::new(&defaults))
    }

    #[test]
    fn test_field_mapping() {
        let page = meta(
            "title: Deploy\ndescription: How\nkeywords: [ops]\nimage: /d.png\nauthor: Bob\ndate: 2024-05-01\nupdatedDate: 2024-06-01\ncategory: Guides\n",
        );
        let seo = map(&page, "/ops/deploy").unwrap();

        assert_eq!(seo.options.title.as_deref(), Some("Deploy"));
        assert_eq!(seo.options.kind, PageKind::Article);
        assert_eq!(seo.options.published_time.as_deref(), Some("2024-05-01"));
        assert_eq!(seo.options.modified_time.as_deref(), Some("2024-06-01"));
        assert_eq!(seo.options.section.as_deref(), Some("Guides"));
        assert_eq!(seo.options.keywords, vec!["ops"]);
        assert!(matches!(&seo.json_ld[..], [JsonLd::BlogPosting(p)] if p.headline == "Deploy"));
    }

    #[test]
    fn test_undated_page_is_website_without_json_ld() {
        let seo = map(&meta("title: Intro\n"), "/guide/intro").unwrap();
        assert_eq!(seo.options.kind, PageKind::Website);
        assert!(seo.json_ld.is_empty());
    }

    #[test]
    fn test_root_gets_website_schema() {
        let seo = map(&meta("title: Home\ndescription: Start\n"), "/").unwrap();
        assert_eq!(
            seo.json_ld,
            vec![JsonLd::Website(WebSite {
                name: None,
                description: Some("Start".into()),
                url: None,
            })]
        );
    }

    #[test]
    fn test_schema_override() {
        let seo = map(&meta("title: Design\nconfig:\n  schema: article\n"), "/design").unwrap();
        assert_eq!(seo.json_ld[0].kind(), SchemaKind::Article);
        // No date, so Open Graph stays a website
        assert_eq!(seo.options.kind, PageKind::Website);
    }

    #[test]
    fn test_unknown_schema() {
        let err = map(&meta("config:\n  schema: recipe\n"), "/x").unwrap_err();
        assert_eq!(err, SeoError::UnknownSchema("recipe".into()));
    }

    #[test]
    fn test_posting_requires_title() {
        let err = map(&meta("date: 2024-05-01\n"), "/notes").unwrap_err();
        assert_eq!(
            err,
            SeoError::MissingField {
                schema: "BlogPosting",
                field: "title"
            }
        );
    }

    #[test]
    fn test_breadcrumbs() {
        let defaults = test_defaults();
        let mut titles = FxHashMap::default();
        titles.insert("/guide".to_string(), "User Guide".to_string());
        let ctx = SeoContext::new(&defaults)
            .with_breadcrumbs(true)
            .with_titles(&titles);

        let seo = PageSeo::from_meta(&meta("title: Intro\n"), "/guide/getting-started/intro", &ctx)
            .unwrap();
        let JsonLd::Breadcrumb(items) = &seo.json_ld[0] else {
            panic!("expected breadcrumb");
        };
        assert_eq!(
            items,
            &vec![
                BreadcrumbItem::new("Process Docs", "https://docs.example.com/"),
                BreadcrumbItem::new("User Guide", "https://docs.example.com/guide"),
                BreadcrumbItem::new(
                    "Getting started",
                    "https://docs.example.com/guide/getting-started"
                ),
                BreadcrumbItem::new("Intro", "https://docs.example.com/guide/getting-started/intro"),
            ]
        );

        let root = PageSeo::from_meta(&meta("title: Home\n"), "/", &ctx).unwrap();
        assert_eq!(root.json_ld.len(), 1);
        assert_eq!(root.json_ld[0].kind(), SchemaKind::Website);
    }

    #[test]
    fn test_explicit_breadcrumb_not_duplicated() {
        let defaults = test_defaults();
        let ctx = SeoContext::new(&defaults).with_breadcrumbs(true);
        let page = meta("title: Ref\nconfig:\n  schema: breadcrumb\n");
        let seo = PageSeo::from_meta(&page, "/ref", &ctx).unwrap();
        assert_eq!(seo.json_ld.len(), 1);
    }

    #[test]
    fn test_head() {
        let defaults = test_defaults();
        let page = meta("title: Deploy\ndate: 2024-05-01\n");
        let seo = PageSeo::from_meta(&page, "/deploy", &SeoContext::new(&defaults)).unwrap();
        let html = seo.head(&defaults).unwrap().render();

        assert!(html.contains("<title>Deploy - Process Docs</title>"));
        assert!(html.contains(r#"<meta property="og:type" content="article">"#));
        assert!(html.contains(r#""@type":"BlogPosting""#));
        assert!(html.contains(r#""dateModified":"2024-05-01""#));
    }
}
