//! Post bundle: everything the content pipeline hands over for one post.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};

use crate::outline::HeadingEntry;
use crate::utils::reading::ReadingTime;

/// Input for rendering one post page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostBundle {
    pub front_matter: FrontMatter,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub prev: Option<PostLink>,
    #[serde(default)]
    pub next: Option<PostLink>,
    /// Headings of the body in document order.
    #[serde(default)]
    pub toc: Vec<HeadingEntry>,
    /// Pre-rendered body HTML, inserted verbatim.
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontMatter {
    pub slug: String,
    /// `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SSZ`.
    pub date: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reading_time: Option<ReadingTime>,
    /// Source file of the post, not used for rendering.
    #[serde(default)]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    /// Profile URL, e.g. `https://twitter.com/someone`.
    #[serde(default)]
    pub twitter: Option<String>,
}

/// Neighbouring post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostLink {
    pub slug: String,
    pub title: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl PostBundle {
    /// Read a bundle from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read post bundle '{}'", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse post bundle '{}'", path.display()))
    }

    /// Reading time from the front matter, estimated from the body otherwise.
    pub fn reading_time(&self) -> ReadingTime {
        self.front_matter
            .reading_time
            .clone()
            .unwrap_or_else(|| ReadingTime::estimate(&self.body))
    }
}
