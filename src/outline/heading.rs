//! Heading records supplied by the content pipeline.

use serde::{Deserialize, Serialize};

/// A heading as it appears in the document, top to bottom.
///
/// Deserializes from either the canonical shape
/// `{"id": "intro", "depth": 1, "title": "Intro"}` or the pipeline shape
/// `{"url": "#intro", "depth": 1, "value": "Intro"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHeading")]
pub struct HeadingEntry {
    /// Anchor id, unique within a page.
    pub id: String,
    /// Nesting depth (1 = top-level section).
    pub depth: u8,
    /// Display text.
    pub title: String,
}

impl HeadingEntry {
    pub fn new(id: impl Into<String>, depth: u8, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            depth,
            title: title.into(),
        }
    }

    /// Fragment link to this heading (`#id`).
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Deserialize)]
struct RawHeading {
    id: Option<String>,
    url: Option<String>,
    depth: u8,
    #[serde(alias = "value")]
    title: String,
}

impl TryFrom<RawHeading> for HeadingEntry {
    type Error = String;

    fn try_from(raw: RawHeading) -> Result<Self, Self::Error> {
        let id = match (raw.id, raw.url) {
            (Some(id), _) => id,
            (None, Some(url)) => url.strip_prefix('#').unwrap_or(&url).to_string(),
            (None, None) => {
                return Err(format!("heading `{}` has neither `id` nor `url`", raw.title));
            }
        };

        if id.is_empty() {
            return Err(format!("heading `{}` has an empty id", raw.title));
        }

        Ok(Self {
            id,
            depth: raw.depth,
            title: raw.title,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_canonical_shape() {
        let json = r#"{"id": "intro", "depth": 1, "title": "Intro"}"#;
        let entry: HeadingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry, HeadingEntry::new("intro", 1, "Intro"));
    }

    #[test]
    fn test_deserialize_pipeline_shape() {
        let json = r##"{"value": "Getting started", "url": "#getting-started", "depth": 2}"##;
        let entry: HeadingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "getting-started");
        assert_eq!(entry.title, "Getting started");
        assert_eq!(entry.depth, 2);
    }

    #[test]
    fn test_id_wins_over_url() {
        let json = r##"{"id": "a", "url": "#b", "depth": 1, "title": "A"}"##;
        let entry: HeadingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "a");
    }

    #[test]
    fn test_missing_id_and_url_is_error() {
        let json = r#"{"depth": 1, "title": "Nowhere"}"#;
        let err = serde_json::from_str::<HeadingEntry>(json).unwrap_err();
        assert!(err.to_string().contains("Nowhere"));
    }

    #[test]
    fn test_empty_fragment_is_error() {
        let json = r##"{"url": "#", "depth": 1, "title": "Empty"}"##;
        assert!(serde_json::from_str::<HeadingEntry>(json).is_err());
    }

    #[test]
    fn test_href() {
        assert_eq!(HeadingEntry::new("setup", 2, "Setup").href(), "#setup");
    }

    #[test]
    fn test_serialize_canonical_shape() {
        let json = serde_json::to_string(&HeadingEntry::new("a", 1, "A")).unwrap();
        assert_eq!(json, r#"{"id":"a","depth":1,"title":"A"}"#);
    }
}
