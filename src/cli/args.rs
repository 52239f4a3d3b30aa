//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// SEO meta tags and JSON-LD for static documentation sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: docseo.toml)
    #[arg(short = 'C', long, default_value = "docseo.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override site URL.
    ///
    /// Useful for CI/CD deployments where the production URL differs from
    /// the one in docseo.toml.
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate head metadata for every content page
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the generated head block for a single content file
    #[command(visible_alias = "p")]
    Page {
        /// Content file (relative to cwd or the content directory)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Override the route derived from the file path (e.g., /guide/intro)
        #[arg(short, long)]
        route: Option<String>,
    },

    /// Print generated metadata as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// Print a single JSON-LD object
    #[command(name = "jsonld", visible_alias = "j")]
    JsonLd {
        #[command(flatten)]
        args: JsonLdArgs,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Inject into rendered `index.html` files instead of writing `head.html` fragments
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub inject: Option<bool>,

    /// Skip draft pages
    #[arg(short = 'E', long)]
    pub skip_drafts: bool,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Paths to query (files, directories, or omit for all content).
    /// Use `-` to read paths from stdin (one per line).
    #[arg(value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Include draft pages in results
    #[arg(short, long)]
    pub drafts: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// JSON-LD command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct JsonLdArgs {
    /// Schema kind: website | blogPosting | article | breadcrumb
    pub kind: String,

    /// Current page path, used for `mainEntityOfPage`
    #[arg(long, default_value = "/")]
    pub path: String,

    /// Website name
    #[arg(long)]
    pub name: Option<String>,

    /// Explicit page or website URL
    #[arg(long, value_hint = clap::ValueHint::Url)]
    pub url: Option<String>,

    /// Posting headline
    #[arg(long)]
    pub headline: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Image path or absolute URL
    #[arg(long)]
    pub image: Option<String>,

    /// Publication date (e.g., 2024-05-01)
    #[arg(long)]
    pub published: Option<String>,

    /// Modification date
    #[arg(long)]
    pub modified: Option<String>,

    #[arg(long)]
    pub author: Option<String>,

    /// Breadcrumb item as NAME=URL, repeatable and kept in order
    #[arg(long = "item", value_name = "NAME=URL")]
    pub items: Vec<String>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build() {
        let cli = Cli::parse_from(["docseo", "build", "--inject=false", "-E"]);
        match cli.command {
            Commands::Build { build_args } => {
                assert_eq!(build_args.inject, Some(false));
                assert!(build_args.skip_drafts);
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_parse_jsonld_items_in_order() {
        let cli = Cli::parse_from([
            "docseo",
            "jsonld",
            "breadcrumb",
            "--item",
            "Home=/",
            "--item",
            "Docs=/docs",
        ]);
        match cli.command {
            Commands::JsonLd { args } => {
                assert_eq!(args.kind, "breadcrumb");
                assert_eq!(args.items, vec!["Home=/", "Docs=/docs"]);
            }
            _ => panic!("expected jsonld"),
        }
    }

    #[test]
    fn test_global_site_url() {
        let cli = Cli::parse_from(["docseo", "page", "intro.md", "-U", "https://x.dev"]);
        assert_eq!(cli.site_url.as_deref(), Some("https://x.dev"));
        assert!(matches!(cli.command, Commands::Page { .. }));
    }
}
