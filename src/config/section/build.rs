//! `[build]` configuration (content/output directories, head injection).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content directory (Markdown/YAML pages).
    pub content: PathBuf,

    /// Output directory of the rendered site.
    pub output: PathBuf,

    /// Inject into `<output>/<route>/index.html` when it exists,
    /// otherwise write `<output>/<route>/head.html`.
    pub inject: bool,

    /// Skip pages with `draft: true`.
    pub skip_drafts: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: ".output".into(),
            inject: true,
            skip_drafts: false,
        }
    }
}
