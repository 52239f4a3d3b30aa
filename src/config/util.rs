//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`.
/// Returns the absolute path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/docs/content/guide/  ← cwd
/// /home/user/docs/docseo.toml     ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Search upward from `start` for `config_name`.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_parent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("content/guide");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp.path().join("docseo.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("docseo.toml")).unwrap();
        assert_eq!(found, temp.path().join("docseo.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let temp = TempDir::new().unwrap();
        let name = Path::new("docseo-missing-8f3a.toml");
        assert!(find_config_file_from(temp.path(), name).is_none());
    }

    #[test]
    fn test_find_config_absolute() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        std::fs::write(&path, "").unwrap();

        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path.clone()));
        assert!(find_config_file_from(Path::new("/"), &temp.path().join("nope.toml")).is_none());
    }
}
