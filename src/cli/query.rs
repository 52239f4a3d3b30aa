//! Query command implementation.
//!
//! Prints the generated metadata of content files as JSON, one object per
//! page: source path, route, front matter, `<meta>` document and JSON-LD.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use crate::cli::args::QueryArgs;
use crate::cli::common::{collect_content_files, load_pages, seo_context, title_index};
use crate::config::SiteConfig;
use crate::log;
use crate::page::{Page, PageMeta, SeoContext};
use crate::seo::{SeoMeta, StructuredData};
use crate::utils::plural_count;

/// Query result for a single page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQueryResult<'a> {
    pub path: String,
    pub route: &'a str,
    pub front_matter: &'a PageMeta,
    pub meta: SeoMeta,
    pub json_ld: Vec<StructuredData>,
}

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let files = collect_content_files(&args.paths, &config.build.content)?;
    log!("query"; "querying {}", plural_count(files.len(), "file"));

    let loaded = load_pages(&files, &config.build.content);
    let mut failed = loaded.failed.len();
    for (file, err) in &loaded.failed {
        log!("error"; "{}: {:#}", config.root_relative(file).display(), err);
    }

    let pages: Vec<&Page> = loaded
        .pages
        .iter()
        .filter(|page| args.drafts || !page.meta.draft)
        .collect();

    let defaults = crate::seo::SiteDefaults::from_config(config);
    let titles = title_index(pages.iter().copied());
    let ctx = seo_context(config, &defaults, &titles);

    let mut results = Vec::with_capacity(pages.len());
    for page in pages {
        match query_page(page, &ctx, config) {
            Ok(result) => results.push(result),
            Err(e) => {
                failed += 1;
                log!("error"; "{}: {:#}", config.root_relative(&page.source).display(), e);
            }
        }
    }

    log!("query"; "found {}", plural_count(results.len(), "page"));
    output_results(&results, args)?;

    if failed > 0 {
        bail!("query failed for {}", plural_count(failed, "file"));
    }
    Ok(())
}

fn query_page<'a>(
    page: &'a Page,
    ctx: &SeoContext<'_>,
    config: &SiteConfig,
) -> Result<PageQueryResult<'a>> {
    let seo = page.seo(ctx)?;
    Ok(PageQueryResult {
        path: config.root_relative(&page.source).display().to_string(),
        route: &page.route,
        front_matter: &page.meta,
        meta: seo.meta(ctx.defaults),
        json_ld: seo.structured_data(ctx.defaults),
    })
}

fn output_results(results: &[PageQueryResult<'_>], args: &QueryArgs) -> Result<()> {
    let formatted = if args.pretty {
        serde_json::to_string_pretty(results)?
    } else {
        serde_json::to_string(results)?
    };

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_query_writes_json() {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join("index.md"), "---\ntitle: Home\n---\n").unwrap();
        fs::write(content.join("wip.md"), "---\ntitle: WIP\ndraft: true\n---\n").unwrap();

        let mut config = test_parse_config("");
        config.build.content = content;
        config.set_root(dir.path());

        let output = dir.path().join("out.json");
        let args = QueryArgs {
            paths: Vec::<PathBuf>::new(),
            drafts: false,
            pretty: false,
            output: Some(output.clone()),
        };
        run_query(&args, &config).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let pages = json.as_array().unwrap();
        assert_eq!(pages.len(), 1);

        let home = &pages[0];
        assert_eq!(home["path"], "content/index.md");
        assert_eq!(home["route"], "/");
        assert_eq!(home["frontMatter"]["title"], "Home");
        assert_eq!(home["meta"]["title"], "Home - Docs");
        assert_eq!(home["meta"]["openGraph"]["url"], "https://docs.example.com/");
        assert_eq!(home["jsonLd"][0]["@type"], "WebSite");
    }

    #[test]
    fn test_query_breadcrumbs_ignore_hidden_drafts() {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(content.join("guide")).unwrap();
        fs::write(content.join("guide/index.md"), "---\ntitle: Secret Guide\ndraft: true\n---\n").unwrap();
        fs::write(content.join("guide/intro.md"), "---\ntitle: Intro\n---\n").unwrap();

        let mut config = test_parse_config("");
        config.build.content = content;
        config.seo.breadcrumbs = true;
        config.set_root(dir.path());

        let output = dir.path().join("out.json");
        let mut args = QueryArgs {
            paths: Vec::<PathBuf>::new(),
            drafts: false,
            pretty: false,
            output: Some(output.clone()),
        };
        let crumb = |args: &QueryArgs| {
            run_query(args, &config).unwrap();
            let json: serde_json::Value =
                serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
            let intro = json
                .as_array()
                .unwrap()
                .iter()
                .find(|page| page["route"] == "/guide/intro")
                .cloned()
                .unwrap();
            let breadcrumb = intro["jsonLd"]
                .as_array()
                .unwrap()
                .iter()
                .find(|data| data["@type"] == "BreadcrumbList")
                .cloned()
                .unwrap();
            breadcrumb["itemListElement"][1]["name"].clone()
        };

        assert_eq!(crumb(&args), "Guide");
        args.drafts = true;
        assert_eq!(crumb(&args), "Secret Guide");
    }
}
