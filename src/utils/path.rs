//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `resolve_path` - resolve relative paths with fallback directory

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a path that may be relative to cwd or a fallback directory.
///
/// Tries in order:
/// 1. If absolute, use as-is
/// 2. If exists relative to cwd, normalize to absolute
/// 3. Otherwise, resolve relative to `fallback_dir`
///
/// # Example
/// ```ignore
/// // User passes "guide/intro.md", fallback is content_dir
/// let resolved = resolve_path(Path::new("guide/intro.md"), content_dir);
/// ```
#[inline]
pub fn resolve_path(path: &Path, fallback_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if path.exists() {
        return normalize_path(path);
    }

    normalize_path(&fallback_dir.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.md"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("relative/path/file.md"));
    }

    #[test]
    fn test_resolve_path_absolute() {
        let path = Path::new("/absolute/file.md");
        assert_eq!(resolve_path(path, Path::new("/content")), path);
    }

    #[test]
    fn test_resolve_path_fallback_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("guide")).unwrap();
        std::fs::write(temp.path().join("guide/intro.md"), "# Intro").unwrap();

        let resolved = resolve_path(Path::new("guide/intro.md"), temp.path());
        assert!(resolved.ends_with("guide/intro.md"));
        assert!(resolved.exists());
    }
}
