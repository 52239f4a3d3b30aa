//! `page` command: print the head block of a single content file.

use std::path::Path;

use anyhow::Result;

use crate::cli::common::{seo_context, site_titles};
use crate::config::SiteConfig;
use crate::page::Page;
use crate::seo::SiteDefaults;
use crate::utils::path::resolve_path;

/// Render the head block for `file`, optionally under an explicit route.
pub fn render_page(file: &Path, route: Option<&str>, config: &SiteConfig) -> Result<String> {
    let content_dir = &config.build.content;
    let source = resolve_path(file, content_dir);

    let mut page = Page::load(&source, content_dir)?;
    if let Some(route) = route {
        page.route = normalize_route(route);
    }
    crate::debug!("page"; "{} -> {}", source.display(), page.route);

    let defaults = SiteDefaults::from_config(config);
    let titles = site_titles(config);
    let ctx = seo_context(config, &defaults, &titles);

    let head = page.seo(&ctx)?.head(&defaults)?;
    Ok(head.render())
}

/// Execute page command
pub fn run_page(file: &Path, route: Option<&str>, config: &SiteConfig) -> Result<()> {
    print!("{}", render_page(file, route, config)?);
    Ok(())
}

/// `guide/intro/` -> `/guide/intro`, empty -> `/`.
fn normalize_route(route: &str) -> String {
    format!("/{}", route.trim_matches('/'))
}
