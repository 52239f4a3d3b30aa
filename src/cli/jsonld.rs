//! `jsonld` command: print one structured data object from CLI arguments.

use anyhow::{Context, Result};

use crate::cli::args::JsonLdArgs;
use crate::config::SiteConfig;
use crate::seo::{BreadcrumbItem, JsonLd, Posting, SchemaKind, SeoError, SiteDefaults, WebSite, jsonld};

/// Build the payload described by the arguments.
pub fn payload_from_args(args: &JsonLdArgs) -> Result<JsonLd, SeoError> {
    let kind: SchemaKind = args.kind.parse()?;

    let posting = |schema: &'static str| -> Result<Posting, SeoError> {
        let headline = args
            .headline
            .clone()
            .ok_or(SeoError::MissingField {
                schema,
                field: "headline",
            })?;
        Ok(Posting {
            headline,
            description: args.description.clone(),
            image: args.image.clone(),
            date_published: args.published.clone(),
            date_modified: args.modified.clone(),
            author: args.author.clone(),
            url: args.url.clone(),
        })
    };

    let payload = match kind {
        SchemaKind::Website => JsonLd::Website(WebSite {
            name: args.name.clone(),
            description: args.description.clone(),
            url: args.url.clone(),
        }),
        SchemaKind::BlogPosting => JsonLd::BlogPosting(posting("BlogPosting")?),
        SchemaKind::Article => JsonLd::Article(posting("Article")?),
        SchemaKind::Breadcrumb => JsonLd::Breadcrumb(
            args.items
                .iter()
                .map(|item| item.parse::<BreadcrumbItem>())
                .collect::<Result<_, _>>()?,
        ),
    };

    Ok(payload)
}

/// Execute jsonld command
pub fn run_jsonld(args: &JsonLdArgs, config: &SiteConfig) -> Result<()> {
    let payload = payload_from_args(args).context("invalid jsonld arguments")?;
    let defaults = SiteDefaults::from_config(config);
    let data = jsonld::generate(&payload, &defaults, &args.path);

    let json = if args.pretty {
        data.to_json_pretty()?
    } else {
        data.to_json()?
    };
    println!("{json}");
    Ok(())
}
