//! Page metadata from front matter.

use serde::{Deserialize, Deserializer, Serialize};

use super::JsonMap;

/// Deserialize keywords, treating `null` as empty vec
fn deserialize_keywords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Deserialize a scalar as text.
///
/// TOML front matter parses bare dates (`date = 2024-05-01`) as datetimes,
/// and YAML parses `version: 1.2` as a number; both are kept as text.
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // toml datetimes surface as a single-entry map
        Value::Object(map) if map.len() == 1 => map.into_iter().find_map(|(_, v)| match v {
            Value::String(s) => Some(s),
            _ => None,
        }),
        _ => None,
    }))
}

/// Page metadata from Markdown front matter or a YAML data page.
///
/// # Standard Fields
///
/// | Field         | Type          | Description                         |
/// |---------------|---------------|-------------------------------------|
/// | `title`       | `String`      | Page title                          |
/// | `description` | `String`      | Page description                    |
/// | `date`        | `String`      | Publication date (marks an article) |
/// | `updatedDate` | `String`      | Last update date                    |
/// | `keywords`    | `Vec<String>` | Keyword list                        |
/// | `image`       | `String`      | Social preview image                |
/// | `author`      | `String`      | Author name                         |
/// | `category`    | `String`      | Article section                     |
/// | `draft`       | `bool`        | Draft status (default: false)       |
/// | `config`      | map           | Free-form page settings             |
///
/// `config.schema` selects the structured data schema for the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<String>,
    #[serde(deserialize_with = "deserialize_keywords", skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub draft: bool,
    #[serde(skip_serializing_if = "JsonMap::is_empty")]
    pub config: JsonMap,
    /// Remaining fields, kept for `query` output.
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl PageMeta {
    /// `config.<key>` as a string.
    pub fn config_str(&self, key: &str) -> Option<&str> {
        self.config.get(key).and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_meta_default() {
        let meta = PageMeta::default();
        assert!(meta.title.is_none());
        assert!(!meta.draft);
        assert!(meta.keywords.is_empty());
        assert!(meta.config.is_empty());
    }

    #[test]
    fn test_page_meta_deserialize() {
        let json = r#"{
            "title": "Deploy",
            "date": "2024-05-01",
            "updatedDate": "2024-06-01",
            "keywords": ["ops", "deploy"],
            "category": "Guides",
            "config": {"schema": "article"}
        }"#;
        let meta: PageMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.title.as_deref(), Some("Deploy"));
        assert_eq!(meta.updated_date.as_deref(), Some("2024-06-01"));
        assert_eq!(meta.keywords, vec!["ops", "deploy"]);
        assert_eq!(meta.category.as_deref(), Some("Guides"));
        assert_eq!(meta.config_str("schema"), Some("article"));
        assert!(meta.extra.is_empty());
    }

    #[test]
    fn test_page_meta_null_keywords() {
        let meta: PageMeta = serde_json::from_str(r#"{"keywords": null}"#).unwrap();
        assert!(meta.keywords.is_empty());
    }

    #[test]
    fn test_scalars_as_text() {
        let meta: PageMeta = serde_json::from_str(r#"{"title": 2024, "author": null}"#).unwrap();
        assert_eq!(meta.title.as_deref(), Some("2024"));
        assert!(meta.author.is_none());
    }

    #[test]
    fn test_extra_fields_preserved() {
        let meta: PageMeta =
            serde_json::from_str(r#"{"title": "T", "navigation": false, "order": 3}"#).unwrap();
        assert_eq!(meta.extra.get("order").and_then(|v| v.as_i64()), Some(3));
        assert_eq!(meta.extra.len(), 2);
    }

    #[test]
    fn test_serialize_skips_empty() {
        let meta = PageMeta {
            title: Some("T".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(json, r#"{"title":"T","draft":false}"#);
    }
}
