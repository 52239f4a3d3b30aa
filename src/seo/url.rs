//! Absolute URL resolution against the site URL.

/// Whether `s` already carries a scheme (`http://`, `https://`).
#[inline]
pub fn is_absolute(s: &str) -> bool {
    s.starts_with("http")
}

/// Resolve `path` against `site_url`.
///
/// Absolute URLs pass through unchanged; anything else is appended to the
/// site URL, with a `/` inserted when `path` lacks one.
///
/// ```ignore
/// absolute_url("https://x.dev", "/img/a.png")        -> "https://x.dev/img/a.png"
/// absolute_url("https://x.dev", "img/a.png")         -> "https://x.dev/img/a.png"
/// absolute_url("https://x.dev", "https://cdn/a.png") -> "https://cdn/a.png"
/// ```
pub fn absolute_url(site_url: &str, path: &str) -> String {
    if is_absolute(path) {
        return path.to_string();
    }
    join(site_url, path)
}

/// Concatenate the site URL with a route path (`/guide/intro`).
///
/// An empty path yields the site URL itself.
pub fn join(site_url: &str, path: &str) -> String {
    if path.is_empty() {
        site_url.to_string()
    } else if path.starts_with('/') {
        format!("{site_url}{path}")
    } else {
        format!("{site_url}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "https://docs.example.com";

    #[test]
    fn test_absolute_passthrough() {
        assert_eq!(
            absolute_url(SITE, "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(absolute_url(SITE, "http://a.b/c"), "http://a.b/c");
    }

    #[test]
    fn test_relative_with_slash() {
        assert_eq!(
            absolute_url(SITE, "/images/a.png"),
            "https://docs.example.com/images/a.png"
        );
    }

    #[test]
    fn test_relative_without_slash() {
        assert_eq!(
            absolute_url(SITE, "images/a.png"),
            "https://docs.example.com/images/a.png"
        );
    }

    #[test]
    fn test_join_route() {
        assert_eq!(join(SITE, "/"), "https://docs.example.com/");
        assert_eq!(join(SITE, ""), SITE);
        assert_eq!(join(SITE, "/guide/intro"), "https://docs.example.com/guide/intro");
    }
}
