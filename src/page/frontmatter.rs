//! Front matter extraction.
//!
//! - Markdown: YAML between `---` fences or TOML between `+++` fences at the
//!   top of the file. No front matter yields default metadata.
//! - YAML data pages (`.yml` / `.yaml`): the whole file is the metadata.

use anyhow::{Context, Result};

use super::{ContentKind, PageMeta};

/// Front matter syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Syntax {
    Yaml,
    Toml,
}

/// Extract metadata and return `(metadata, body)`.
pub fn extract(content: &str, kind: ContentKind) -> Result<(PageMeta, &str)> {
    match kind {
        ContentKind::Yaml => Ok((parse_yaml(content)?, "")),
        ContentKind::Markdown => match detect(content) {
            Some((fm, body, Syntax::Yaml)) => Ok((parse_yaml(fm)?, body)),
            Some((fm, body, Syntax::Toml)) => Ok((parse_toml(fm)?, body)),
            None => Ok((PageMeta::default(), content)),
        },
    }
}

fn parse_yaml(content: &str) -> Result<PageMeta> {
    if content.trim().is_empty() {
        return Ok(PageMeta::default());
    }
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).context("invalid YAML front matter")?;
    if value.is_null() {
        return Ok(PageMeta::default());
    }
    serde_yaml::from_value(value).context("invalid YAML front matter")
}

fn parse_toml(content: &str) -> Result<PageMeta> {
    toml::from_str(content).context("invalid TOML front matter")
}

/// Detect and split front matter.
/// Returns `(front_matter, body, syntax)` if found.
fn detect(content: &str) -> Option<(&str, &str, Syntax)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    for (fence, syntax) in [("---", Syntax::Yaml), ("+++", Syntax::Toml)] {
        let Some(rest) = trimmed.strip_prefix(fence) else {
            continue;
        };
        // Opening fence must be alone on its line
        if !rest.starts_with('\n') && !rest.starts_with("\r\n") {
            continue;
        }
        let closing = format!("\n{fence}");
        if let Some(end) = rest.find(&closing) {
            let fm = rest[..end].trim();
            let body = rest[end + closing.len()..].trim_start_matches(['\r', '\n']);
            return Some((fm, body, syntax));
        }
    }

    None
}
