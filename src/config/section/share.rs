//! `[share]` section configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

/// Share links below the post body.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "share")]
pub struct ShareConfig {
    /// "Share on Twitter" link (requires `site.url`).
    #[config(default = "true")]
    pub twitter: bool,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self { twitter: true }
    }
}
