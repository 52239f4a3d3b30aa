//! Common utilities shared across CLI commands.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use jwalk::WalkDir;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::config::SiteConfig;
use crate::debug;
use crate::page::{ContentKind, Page, SeoContext};
use crate::seo::SiteDefaults;
use crate::utils::path::resolve_path;

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Collect all files from a directory recursively
pub fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .collect()
}

/// Collect content files based on CLI paths
pub fn collect_content_files(paths: &[PathBuf], content_dir: &Path) -> Result<Vec<PathBuf>> {
    // Read paths from stdin when `-` is passed
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths_from_stdin()?
    } else {
        paths.to_vec()
    };

    if paths.is_empty() {
        return Ok(filter_content_files(collect_all_files(content_dir)));
    }

    let mut all_files = Vec::new();
    for path in &paths {
        let resolved = resolve_path(path, content_dir);

        if resolved.is_file() {
            if ContentKind::is_content(&resolved) {
                all_files.push(resolved);
            } else {
                bail!("Not a supported content file: {}", path.display());
            }
        } else if resolved.is_dir() {
            all_files.extend(filter_content_files(collect_all_files(&resolved)));
        } else {
            let content_relative = content_dir.join(path);
            bail!(
                "Path not found: {}\n  Tried:\n    - {}\n    - {}",
                path.display(),
                path.display(),
                content_relative.display()
            );
        }
    }

    Ok(all_files)
}

/// Read file paths from stdin, one per line
pub fn read_paths_from_stdin() -> Result<Vec<PathBuf>> {
    read_paths(io::stdin().lock())
}

fn read_paths(reader: impl BufRead) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }
    Ok(paths)
}

/// Filter a list of paths to only include supported content files
pub fn filter_content_files(files: Vec<PathBuf>) -> Vec<PathBuf> {
    files
        .into_iter()
        .filter(|p| ContentKind::is_content(p))
        .collect()
}

/// Pages loaded in parallel, plus the files that failed to load.
pub struct LoadedPages {
    pub pages: Vec<Page>,
    pub failed: Vec<(PathBuf, anyhow::Error)>,
}

/// Load pages in parallel, keeping input order.
pub fn load_pages(files: &[PathBuf], content_dir: &Path) -> LoadedPages {
    let results: Vec<_> = files
        .par_iter()
        .map(|file| (file, Page::load(file, content_dir)))
        .collect();

    let mut pages = Vec::with_capacity(results.len());
    let mut failed = Vec::new();
    for (file, result) in results {
        match result {
            Ok(page) => pages.push(page),
            Err(e) => failed.push((file.clone(), e)),
        }
    }

    LoadedPages { pages, failed }
}

/// Page titles by route, for naming breadcrumb segments.
pub fn title_index<'a>(pages: impl IntoIterator<Item = &'a Page>) -> FxHashMap<String, String> {
    pages
        .into_iter()
        .filter_map(|page| {
            let title = page.meta.title.as_deref().filter(|t| !t.is_empty())?;
            Some((page.route.clone(), title.to_string()))
        })
        .collect()
}

/// Several source files mapping to one route.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteConflict {
    pub route: String,
    /// The file that produces the route.
    pub kept: PathBuf,
    pub skipped: Vec<PathBuf>,
}

/// Pages a build generates, after draft and route filtering.
pub struct SitePages {
    pub pages: Vec<Page>,
    pub drafts_skipped: usize,
    pub conflicts: Vec<RouteConflict>,
}

/// Drop drafts when configured, then keep one page per route.
///
/// Pages are ordered by source path and the first file for a route wins,
/// so the result does not depend on load order.
pub fn select_pages(mut pages: Vec<Page>, config: &SiteConfig) -> SitePages {
    let mut drafts_skipped = 0;
    if config.build.skip_drafts {
        let before = pages.len();
        pages.retain(|page| !page.meta.draft);
        drafts_skipped = before - pages.len();
    }

    pages.sort_by(|a, b| a.source.cmp(&b.source));

    let mut winners: FxHashMap<String, PathBuf> = FxHashMap::default();
    let mut conflicts: Vec<RouteConflict> = Vec::new();
    let mut kept = Vec::with_capacity(pages.len());
    for page in pages {
        let Some(winner) = winners.get(&page.route) else {
            winners.insert(page.route.clone(), page.source.clone());
            kept.push(page);
            continue;
        };
        match conflicts.iter_mut().find(|c| c.route == page.route) {
            Some(conflict) => conflict.skipped.push(page.source),
            None => conflicts.push(RouteConflict {
                route: page.route,
                kept: winner.clone(),
                skipped: vec![page.source],
            }),
        }
    }
    conflicts.sort_by(|a, b| a.route.cmp(&b.route));

    SitePages {
        pages: kept,
        drafts_skipped,
        conflicts,
    }
}

/// Titles of every page a build would generate.
pub fn site_titles(config: &SiteConfig) -> FxHashMap<String, String> {
    let content_dir = &config.build.content;
    let files = filter_content_files(collect_all_files(content_dir));
    let loaded = load_pages(&files, content_dir);
    for (file, err) in &loaded.failed {
        debug!("titles"; "skipping {}: {:#}", config.root_relative(file).display(), err);
    }
    title_index(&select_pages(loaded.pages, config).pages)
}

/// SEO context for the configured site.
pub fn seo_context<'a>(
    config: &SiteConfig,
    defaults: &'a SiteDefaults,
    titles: &'a FxHashMap<String, String>,
) -> SeoContext<'a> {
    SeoContext::new(defaults)
        .with_breadcrumbs(config.seo.breadcrumbs)
        .with_titles(titles)
}
