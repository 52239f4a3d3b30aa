use anyhow::Result;
use clap::{ColorChoice, Parser};
use docseo::cli::{self, Cli, Commands};
use docseo::config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config, false).map(|_| ()),
        Commands::Page { file, route } => cli::page::run_page(file, route.as_deref(), &config),
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::JsonLd { args } => cli::jsonld::run_jsonld(args, &config),
    }
}
