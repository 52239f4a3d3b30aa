//! Content pages: front matter, routes, and SEO mapping.

pub mod frontmatter;
mod kind;
mod meta;
pub mod route;
mod seo;

pub use kind::ContentKind;
pub use meta::PageMeta;
pub use route::route_for;
pub use seo::{PageSeo, SeoContext};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// A loaded content page.
#[derive(Debug, Clone)]
pub struct Page {
    /// Source file path
    pub source: PathBuf,
    /// URL route (e.g., `/guide/intro`)
    pub route: String,
    pub kind: ContentKind,
    pub meta: PageMeta,
}

impl Page {
    /// Read a content file and parse its front matter.
    pub fn load(source: &Path, content_dir: &Path) -> Result<Self> {
        let Some(kind) = ContentKind::from_path(source) else {
            bail!("not a content file: {}", source.display());
        };
        let content = fs::read_to_string(source)
            .with_context(|| format!("failed to read {}", source.display()))?;
        let (meta, _body) = frontmatter::extract(&content, kind)
            .with_context(|| format!("in {}", source.display()))?;

        Ok(Self {
            source: source.to_path_buf(),
            route: route_for(source, content_dir),
            kind,
            meta,
        })
    }

    pub fn seo(&self, ctx: &SeoContext<'_>) -> Result<PageSeo> {
        PageSeo::from_meta(&self.meta, &self.route, ctx)
            .with_context(|| format!("in {}", self.source.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_page() {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(content.join("1.guide")).unwrap();
        let file = content.join("1.guide/2.intro.md");
        fs::write(&file, "---\ntitle: Intro\n---\n# Intro\n").unwrap();

        let page = Page::load(&file, &content).unwrap();
        assert_eq!(page.route, "/guide/intro");
        assert_eq!(page.kind, ContentKind::Markdown);
        assert_eq!(page.meta.title.as_deref(), Some("Intro"));
    }

    #[test]
    fn test_load_errors_name_the_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("bad.md");
        fs::write(&file, "+++\ntitle = \n+++\n").unwrap();

        let err = Page::load(&file, dir.path()).unwrap_err();
        assert!(err.to_string().contains("bad.md"));

        let err = Page::load(&dir.path().join("logo.png"), dir.path()).unwrap_err();
        assert!(err.to_string().contains("not a content file"));
    }
}
