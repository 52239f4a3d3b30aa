//! Content file to URL route mapping.
//!
//! ```text
//! content/index.md              -> /
//! content/guide/index.md        -> /guide
//! content/1.guide/2.intro.md    -> /guide/intro
//! content/faq.yml               -> /faq
//! ```

use std::path::{Component, Path};

/// Derive the URL route for a content file.
///
/// Strips the content directory and extension, drops `index` segments and
/// numeric ordering prefixes (`2.intro` -> `intro`). The root route is `/`;
/// other routes have no trailing slash.
pub fn route_for(file: &Path, content_dir: &Path) -> String {
    let relative = file.strip_prefix(content_dir).unwrap_or(file);
    let relative = relative.with_extension("");

    let segments: Vec<&str> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .map(strip_order_prefix)
        .filter(|s| !s.is_empty() && *s != "index")
        .collect();

    format!("/{}", segments.join("/"))
}

/// Strip a numeric ordering prefix: `"01.setup"` -> `"setup"`.
fn strip_order_prefix(segment: &str) -> &str {
    match segment.split_once('.') {
        Some((prefix, rest))
            if !prefix.is_empty() && !rest.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) =>
        {
            rest
        }
        _ => segment,
    }
}

/// Route segments, root yields none.
pub fn segments(route: &str) -> impl Iterator<Item = &str> {
    route.split('/').filter(|s| !s.is_empty())
}

/// Human-readable label for a route segment: `getting-started` -> `Getting started`.
pub fn segment_label(segment: &str) -> String {
    let words = segment.replace(['-', '_'], " ");
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
