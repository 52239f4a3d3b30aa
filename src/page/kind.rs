//! Content file kind.

use std::path::Path;

/// Kind of content source, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Markdown with optional `---` YAML or `+++` TOML front matter.
    Markdown,
    /// A YAML data page; the whole file is the metadata.
    Yaml,
}

impl ContentKind {
    /// Detect kind from a path, `None` for non-content files.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "md" | "markdown" => Some(Self::Markdown),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }

    #[inline]
    pub fn is_content(path: &Path) -> bool {
        Self::from_path(path).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(
            ContentKind::from_path(Path::new("a/intro.md")),
            Some(ContentKind::Markdown)
        );
        assert_eq!(
            ContentKind::from_path(Path::new("index.YML")),
            Some(ContentKind::Yaml)
        );
        assert_eq!(ContentKind::from_path(Path::new("logo.png")), None);
        assert_eq!(ContentKind::from_path(Path::new("README")), None);
        assert!(!ContentKind::is_content(Path::new("a/b.txt")));
    }
}
