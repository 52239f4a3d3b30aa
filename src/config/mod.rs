//! Site configuration management for `docseo.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site], [seo], [build]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config file lookup
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                           |
//! |------------|---------------------------------------------------|
//! | `[site]`   | Site URL, name, author, description, locale       |
//! | `[seo]`    | Default image, logo, search action, Twitter card  |
//! | `[build]`  | Content/output directories, head injection        |

pub mod section;
pub mod types;
mod util;

pub use section::{
    BuildSectionConfig, SEARCH_TERM_PLACEHOLDER, SeoConfig, SiteInfoConfig, TwitterCard,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{find_config_file, find_config_file_from};

use crate::cli::{Cli, Commands};
use crate::log;
use crate::utils::path::normalize_path;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docseo.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site information
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// SEO settings
    #[serde(default)]
    pub seo: SeoConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file; the project root
    /// is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = find_config_file(&cli.config).ok_or_else(|| {
            ConfigError::Validation(format!(
                "config file '{}' not found in the current directory or any parent",
                cli.config.display()
            ))
        })?;

        let mut config = Self::from_path(&config_path)?;
        config.config_path = normalize_path(&config_path);
        let root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        config.apply_cli(cli);
        config.normalize_paths(&root);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply global and command-specific CLI overrides.
    fn apply_cli(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        // Override site URL if provided via CLI
        if let Some(ref url) = cli.site_url {
            self.site.url = Some(url.clone());
        }

        if let Commands::Build { build_args } = &cli.command {
            Self::update_option(&mut self.build.inject, build_args.inject.as_ref());
            if build_args.skip_drafts {
                self.build.skip_drafts = true;
            }
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize content/output directories relative to the root directory.
    fn normalize_paths(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.build.content = normalize_path(&root.join(&self.build.content));
        self.build.output = normalize_path(&root.join(&self.build.output));
        self.set_root(&root);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every section validator without printing.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.seo.validate(&mut diag);
        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "[site]\nurl = \"https://docs.example.com\"\nname = \"Docs\"\nauthor = \"Alice\"\n{extra}"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\nname = \"Docs\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.get_root(), Path::new(""));
        assert!(config.site.url.is_none());
        assert_eq!(config.site.language, "zh-CN");
        assert_eq!(config.build.content, PathBuf::from("content"));
        assert!(config.build.inject);
    }

    #[test]
    fn test_parse_full_config() {
        let config = test_parse_config(
            "description = \"Guides\"\n[seo]\nbreadcrumbs = true\ntwitter_card = \"summary\"\n[build]\noutput = \"dist\"\ninject = false",
        );
        assert_eq!(config.site.url.as_deref(), Some("https://docs.example.com"));
        assert_eq!(config.site.description, "Guides");
        assert!(config.seo.breadcrumbs);
        assert_eq!(config.seo.twitter_card, TwitterCard::Summary);
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.inject);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nname = \"Docs\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.name, "Docs");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\nname = \"Docs\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = SiteConfig::from_str("[seo]\nsearch_path = \"/find\"").unwrap();
        let diag = config.diagnostics();
        // missing url, empty name, search path without placeholder
        assert_eq!(diag.len(), 3);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_ok() {
        let config = test_parse_config("");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_root_relative() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/site"));
        assert_eq!(
            config.root_relative("/site/content/intro.md"),
            PathBuf::from("content/intro.md")
        );
        assert_eq!(config.root_relative("/other/x.md"), PathBuf::from("/other/x.md"));
    }
}
