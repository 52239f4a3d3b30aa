//! Head content for a single page.
//!
//! A [`HeadDocument`] collects the metadata document and any number of
//! JSON-LD blocks, then renders them as HTML or splices them into an
//! existing page. Setting metadata replaces the previous value; JSON-LD
//! blocks accumulate in insertion order.

use std::fmt::Write as _;
use std::ops::Range;

use crate::utils::html::{escape, escape_attr, escape_script_text};

use super::jsonld::StructuredData;
use super::meta::SeoMeta;

/// Markers around an injected block, so injecting again replaces it.
const BLOCK_START: &str = "<!-- docseo:head -->";
const BLOCK_END: &str = "<!-- /docseo:head -->";

/// `<head>` fragment builder.
#[derive(Debug, Clone, Default)]
pub struct HeadDocument {
    meta: Option<SeoMeta>,
    /// Serialized JSON-LD documents.
    json_ld: Vec<String>,
}

impl HeadDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the page metadata.
    pub fn set_meta(&mut self, meta: SeoMeta) -> &mut Self {
        self.meta = Some(meta);
        self
    }

    /// Append a structured data block.
    pub fn push_json_ld(&mut self, data: &StructuredData) -> serde_json::Result<&mut Self> {
        self.json_ld.push(data.to_json()?);
        Ok(self)
    }

    pub fn meta(&self) -> Option<&SeoMeta> {
        self.meta.as_ref()
    }

    pub fn json_ld(&self) -> &[String] {
        &self.json_ld
    }

    pub fn is_empty(&self) -> bool {
        self.meta.is_none() && self.json_ld.is_empty()
    }

    /// Render the fragment: title, canonical link, meta tags, then scripts.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(2048);

        if let Some(meta) = &self.meta {
            let _ = writeln!(out, "<title>{}</title>", escape(&meta.title));
            let _ = writeln!(
                out,
                r#"<link rel="canonical" href="{}">"#,
                escape_attr(&meta.canonical)
            );
            for tag in meta.tags() {
                let _ = writeln!(
                    out,
                    r#"<meta {}="{}" content="{}">"#,
                    tag.attr.as_str(),
                    tag.key,
                    escape_attr(&tag.content)
                );
            }
        }

        for json in &self.json_ld {
            let _ = writeln!(
                out,
                r#"<script type="application/ld+json">{}</script>"#,
                escape_script_text(json)
            );
        }

        out
    }

    /// Splice the rendered fragment into a full HTML page.
    ///
    /// - Existing `<title>`, canonical link and `<meta>` tags in the head that
    ///   the generated metadata covers are dropped in favor of the new ones.
    /// - The fragment goes right before `</head>`; without a head, one is
    ///   created after `<html>`, or prepended to the document.
    /// - `<html>` gets a `lang` attribute when it has none.
    /// - A block from an earlier injection is replaced.
    pub fn inject(&self, html: &str) -> String {
        let mut page = html.to_string();
        remove_previous_block(&mut page);

        if self.is_empty() {
            return page;
        }
        let fragment = format!("{BLOCK_START}\n{}{BLOCK_END}\n", self.render());

        let keys: Vec<&str> = self
            .meta
            .iter()
            .flat_map(|meta| meta.tags())
            .map(|tag| tag.key)
            .collect();
        let layout = PageLayout::scan(&page, self.meta.is_some(), &keys);

        let mut edits: Vec<(Range<usize>, String)> = layout
            .superseded
            .into_iter()
            .map(|range| (range, String::new()))
            .collect();

        if let Some(meta) = &self.meta
            && let Some(html) = &layout.html
            && !html.has_lang
            && !meta.lang.is_empty()
        {
            // `<html` is five bytes long
            let at = html.start + 5;
            edits.push((at..at, format!(r#" lang="{}""#, escape_attr(&meta.lang))));
        }

        match (layout.head_close, &layout.html) {
            (Some(close), _) => edits.push((close..close, fragment)),
            (None, Some(html)) => {
                let at = html.open_end;
                edits.push((at..at, format!("<head>\n{fragment}</head>")));
            }
            (None, None) => edits.push((0..0, format!("<head>\n{fragment}</head>\n"))),
        }

        // Apply back to front so earlier offsets stay valid.
        edits.sort_by(|a, b| b.0.start.cmp(&a.0.start));
        let mut floor = page.len();
        for (range, text) in edits {
            if range.end > floor {
                continue;
            }
            floor = range.start;
            page.replace_range(range, &text);
        }

        page
    }
}

fn remove_previous_block(page: &mut String) {
    let Some(start) = page.find(BLOCK_START) else {
        return;
    };
    if let Some(len) = page[start..].find(BLOCK_END) {
        let mut end = start + len + BLOCK_END.len();
        if page[end..].starts_with('\n') {
            end += 1;
        }
        page.replace_range(start..end, "");
    }
}

/// The `<html>` start tag.
#[derive(Debug)]
struct HtmlStart {
    start: usize,
    /// One past the `>` of the start tag.
    open_end: usize,
    has_lang: bool,
}

/// Byte offsets of the elements injection touches, taken from the parsed page.
///
/// Comments, scripts and text are nodes of their own in the tree, so markup
/// that only looks like a tag inside them is never matched.
#[derive(Debug, Default)]
struct PageLayout {
    html: Option<HtmlStart>,
    /// Offset of the head's closing tag, or the end of an unclosed head.
    head_close: Option<usize>,
    /// Head elements replaced by generated ones.
    superseded: Vec<Range<usize>>,
}

impl PageLayout {
    fn scan(page: &str, with_meta: bool, keys: &[&str]) -> Self {
        let mut layout = Self::default();
        let Ok(dom) = tl::parse(page, tl::ParserOptions::default()) else {
            return layout;
        };

        let tags: Vec<(&tl::HTMLTag, Range<usize>)> = dom
            .nodes()
            .iter()
            .filter_map(|node| node.as_tag())
            .filter_map(|tag| Some((tag, span_of(page, tag)?)))
            .collect();
        let first = |name: &str| {
            tags.iter()
                .filter(|(tag, _)| tag.name().as_utf8_str().eq_ignore_ascii_case(name))
                .min_by_key(|(_, span)| span.start)
        };

        if let Some((tag, span)) = first("html")
            && let Some(open_end) = open_tag_end(page, span.start)
        {
            layout.html = Some(HtmlStart {
                start: span.start,
                open_end,
                has_lang: attr(tag, "lang").is_some(),
            });
        }

        let Some((_, head)) = first("head") else {
            return layout;
        };
        let head = head.clone();
        let closed = page[head.clone()]
            .get(head.len().saturating_sub(CLOSE_HEAD.len())..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(CLOSE_HEAD));
        layout.head_close = Some(if closed { head.end - CLOSE_HEAD.len() } else { head.end });

        if !with_meta {
            return layout;
        }
        layout.superseded = tags
            .iter()
            .filter(|(_, span)| span.start > head.start && span.end <= head.end)
            .filter(|(tag, _)| is_superseded(tag, keys))
            .map(|(_, span)| span.clone())
            .collect();
        layout
    }
}

const CLOSE_HEAD: &str = "</head>";

/// Whether a head element duplicates one the generated metadata provides.
fn is_superseded(tag: &tl::HTMLTag, keys: &[&str]) -> bool {
    let name = tag.name().as_utf8_str();
    if name.eq_ignore_ascii_case("title") {
        return true;
    }
    if name.eq_ignore_ascii_case("link") {
        return attr(tag, "rel").is_some_and(|rel| rel.eq_ignore_ascii_case("canonical"));
    }
    if name.eq_ignore_ascii_case("meta") {
        return ["name", "property"]
            .iter()
            .filter_map(|key| attr(tag, key))
            .any(|value| keys.iter().any(|k| k.eq_ignore_ascii_case(&value)));
    }
    false
}

fn attr(tag: &tl::HTMLTag, name: &str) -> Option<String> {
    tag.attributes()
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.map(|v| v.into_owned()).unwrap_or_default())
}

/// Source range of a parsed element. The parser borrows from `page`, so the
/// element's raw bytes point into it.
fn span_of(page: &str, tag: &tl::HTMLTag) -> Option<Range<usize>> {
    let raw = tag.raw().as_bytes();
    let start = (raw.as_ptr() as usize).checked_sub(page.as_ptr() as usize)?;
    let end = start + raw.len();
    (end <= page.len()).then_some(start..end)
}

/// One past the `>` that ends the start tag at `start`, skipping quoted
/// attribute values.
fn open_tag_end(page: &str, start: usize) -> Option<usize> {
    let mut quote = None;
    for (i, b) in page.as_bytes()[start..].iter().enumerate() {
        match (quote, b) {
            (Some(q), _) if q == *b => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(*b),
            (None, b'>') => return Some(start + i + 1),
            _ => {}
        }
    }
    None
}
