//! `[toc]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [toc]
//! enable = true
//! root_margin = "0px 0px -40% 0px"   # bottom 40% of the viewport never activates
//! selector = "h1, h2, h3"            # headings observed by the scroll spy
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::spy::RootMargin;

/// Table of contents and scroll spy settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "toc")]
pub struct TocConfig {
    /// Render the table of contents and its scroll spy.
    #[config(default = "true")]
    pub enable: bool,

    /// Root margin of the intersection observer (CSS shorthand).
    #[config(default = "0px 0px -40% 0px")]
    pub root_margin: RootMargin,

    /// CSS selector for the headings the scroll spy observes.
    #[config(default = "h1, h2, h3")]
    pub selector: String,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            enable: true,
            root_margin: RootMargin::default(),
            selector: "h1, h2, h3".into(),
        }
    }
}

impl TocConfig {
    /// `root_margin` is checked while parsing; only the selector remains.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.selector.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.selector,
                "selector must not be empty",
                "use a heading selector such as \"h1, h2, h3\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, SiteConfig, test_parse_config};
    use crate::spy::{Length, RootMargin};

    #[test]
    fn test_toc_defaults() {
        let config = test_parse_config("");
        assert!(config.toc.enable);
        assert_eq!(config.toc.root_margin, RootMargin::default());
        assert_eq!(config.toc.selector, "h1, h2, h3");
    }

    #[test]
    fn test_toc_values() {
        let config = test_parse_config(
            "[toc]\nenable = false\nroot_margin = \"-10% 0px -50% 0px\"\nselector = \"h2\"",
        );
        assert!(!config.toc.enable);
        assert_eq!(config.toc.root_margin.top, Length::Percent(-10.0));
        assert_eq!(config.toc.root_margin.bottom, Length::Percent(-50.0));
        assert_eq!(config.toc.selector, "h2");
    }

    #[test]
    fn test_invalid_root_margin_is_parse_error() {
        let result = "[toc]\nroot_margin = \"forty percent\"".parse::<SiteConfig>();
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_selector() {
        let config = test_parse_config("[toc]\nselector = \"  \"");
        let mut diag = ConfigDiagnostics::new();
        config.toc.validate(&mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "toc.selector");
    }
}
