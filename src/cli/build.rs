//! Site-wide head generation.
//!
//! Build phases:
//! - **Collect** - Gather content files
//! - **Load** - Parse front matter in parallel, drop drafts, one page per route
//! - **Generate** - Build each page's head and write it next to the page
//! - **Finalize** - Summary and failure report

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;

use crate::cli::common::{
    RouteConflict, collect_all_files, filter_content_files, load_pages, select_pages, seo_context,
    title_index,
};
use crate::config::SiteConfig;
use crate::logger::ProgressLine;
use crate::page::{Page, SeoContext};
use crate::seo::SiteDefaults;
use crate::utils::plural_count;
use crate::{debug, log};

/// Where a page's head ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Spliced into an existing `index.html`.
    Injected,
    /// Written as a standalone `head.html` fragment.
    Fragment,
}

/// Counts reported at the end of a build.
#[derive(Debug, Default)]
pub struct BuildStats {
    pub injected: AtomicUsize,
    pub fragments: AtomicUsize,
    pub drafts_skipped: usize,
    pub failed: usize,
}

impl BuildStats {
    fn record(&self, output: Output) {
        match output {
            Output::Injected => self.injected.fetch_add(1, Ordering::Relaxed),
            Output::Fragment => self.fragments.fetch_add(1, Ordering::Relaxed),
        };
    }

    pub fn injected(&self) -> usize {
        self.injected.load(Ordering::Relaxed)
    }

    pub fn fragments(&self) -> usize {
        self.fragments.load(Ordering::Relaxed)
    }
}

/// Generate head metadata for every content page.
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<BuildStats> {
    let content_dir = &config.build.content;
    if !content_dir.is_dir() {
        bail!("content directory not found: {}", content_dir.display());
    }

    // Collect + load
    let files = filter_content_files(collect_all_files(content_dir));
    debug!("build"; "found {} in {}", plural_count(files.len(), "content file"), content_dir.display());

    let loaded = load_pages(&files, content_dir);
    let mut stats = BuildStats {
        failed: loaded.failed.len(),
        ..Default::default()
    };
    for (file, err) in &loaded.failed {
        log!("error"; "{}: {:#}", config.root_relative(file).display(), err);
    }

    let selected = select_pages(loaded.pages, config);
    stats.drafts_skipped = selected.drafts_skipped;
    warn_route_conflicts(&selected.conflicts, config);
    let pages = selected.pages;

    // Generate
    let defaults = SiteDefaults::from_config(config);
    let titles = title_index(&pages);
    let ctx = seo_context(config, &defaults, &titles);

    let progress = (!quiet).then(|| ProgressLine::new(&[("pages", pages.len())]));
    let failed = AtomicUsize::new(0);

    pages.par_iter().for_each(|page| {
        match write_page_head(page, &ctx, config) {
            Ok(output) => {
                debug!("build"; "{:?}: {}", output, page.route);
                stats.record(output);
            }
            Err(e) => {
                failed.fetch_add(1, Ordering::Relaxed);
                log!("error"; "{}: {:#}", config.root_relative(&page.source).display(), e);
            }
        }
        if let Some(p) = &progress {
            p.inc("pages");
        }
    });

    if let Some(p) = progress {
        p.finish();
    }
    stats.failed += failed.into_inner();

    // Finalize
    if !quiet {
        log_build_result(&stats);
    }
    if stats.failed > 0 {
        bail!("build failed: {}", plural_count(stats.failed, "page"));
    }

    Ok(stats)
}

/// Write one page's head into the output tree.
fn write_page_head(page: &Page, ctx: &SeoContext<'_>, config: &SiteConfig) -> Result<Output> {
    let seo = page.seo(ctx)?;
    let head = seo.head(ctx.defaults)?;

    let dir = output_dir_for(&config.build.output, &page.route);
    let index = dir.join("index.html");

    if config.build.inject && index.is_file() {
        let html = fs::read_to_string(&index)
            .with_context(|| format!("failed to read {}", index.display()))?;
        fs::write(&index, head.inject(&html))
            .with_context(|| format!("failed to write {}", index.display()))?;
        return Ok(Output::Injected);
    }

    let fragment = dir.join("head.html");
    fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    fs::write(&fragment, head.render())
        .with_context(|| format!("failed to write {}", fragment.display()))?;
    Ok(Output::Fragment)
}

/// Output directory of a route: `/guide/intro` -> `<output>/guide/intro`.
pub fn output_dir_for(output: &Path, route: &str) -> PathBuf {
    let relative = route.trim_matches('/');
    if relative.is_empty() {
        output.to_path_buf()
    } else {
        output.join(relative)
    }
}

/// Report routes produced by more than one file.
fn warn_route_conflicts(conflicts: &[RouteConflict], config: &SiteConfig) {
    let relative = |path: &Path| config.root_relative(path).display().to_string();
    for conflict in conflicts {
        let skipped: Vec<_> = conflict.skipped.iter().map(|f| relative(f.as_path())).collect();
        log!(
            "warning";
            "route {} is produced by {} and {}, skipping the latter",
            conflict.route,
            relative(conflict.kept.as_path()),
            skipped.join(", ")
        );
    }
}

fn log_build_result(stats: &BuildStats) {
    if stats.drafts_skipped > 0 {
        log!("build"; "{} skipped", plural_count(stats.drafts_skipped, "draft"));
    }

    let total = stats.injected() + stats.fragments();
    if total == 0 && stats.failed == 0 {
        log!("warning"; "no pages generated, check that content has .md or .yml files");
        return;
    }

    log!(
        "done";
        "{} ({} injected, {} written as head.html)",
        plural_count(total, "page"),
        stats.injected(),
        stats.fragments()
    );
}
