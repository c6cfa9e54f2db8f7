//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "The Graphic Design"
//! url = "https://example.com"
//! locale = "en-US"
//! blog_path = "blog"
//!
//! [site.back]
//! href = "/posts"
//! label = "Back to the Graphic Design"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::section::ShareConfig;

/// Site metadata used in links and dates.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site title.
    pub title: String,

    /// Public site URL (e.g., "https://example.com"), needed for share links.
    pub url: Option<String>,

    /// Locale used to format post dates.
    #[config(default = "en-US")]
    pub locale: String,

    /// URL path under which posts live (`/<blog_path>/<slug>`).
    #[config(default = "blog")]
    pub blog_path: String,

    /// Back link at the end of every post.
    #[config(skip)]
    pub back: BackLinkConfig,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            url: None,
            locale: "en-US".into(),
            blog_path: "blog".into(),
            back: BackLinkConfig::default(),
        }
    }
}

impl SiteSectionConfig {
    /// Site URL without a trailing slash.
    pub fn base_url(&self) -> Option<&str> {
        self.url.as_deref().map(|url| url.trim_end_matches('/'))
    }

    /// Blog path without surrounding slashes.
    pub fn blog_path(&self) -> &str {
        self.blog_path.trim_matches('/')
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid http(s) URL with a host
    /// - without `url`, enabled Twitter sharing is reported and skipped
    /// - `blog_path` must not contain whitespace
    pub fn validate(&self, share: &ShareConfig, diag: &mut ConfigDiagnostics) {
        match &self.url {
            Some(url_str) => Self::validate_url(url_str, diag),
            None if share.twitter => diag.warn(
                Self::FIELDS.url,
                format!(
                    "{} is enabled but {} is not configured, share link omitted",
                    ShareConfig::FIELDS.twitter.as_str(),
                    Self::FIELDS.url.as_str()
                ),
            ),
            None => {}
        }

        if self.blog_path.chars().any(char::is_whitespace) {
            diag.error_with_hint(
                Self::FIELDS.blog_path,
                format!("`{}` contains whitespace", self.blog_path),
                "use a plain path segment such as \"blog\"",
            );
        }

        self.back.validate(diag);
    }

    fn validate_url(url_str: &str, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}

/// Link back to the post index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.back")]
pub struct BackLinkConfig {
    /// Link target.
    #[config(default = "/posts")]
    pub href: String,

    /// Link text, shown after a left arrow.
    #[config(default = "Back to the Graphic Design")]
    pub label: String,
}

impl Default for BackLinkConfig {
    fn default() -> Self {
        Self {
            href: "/posts".into(),
            label: "Back to the Graphic Design".into(),
        }
    }
}

impl BackLinkConfig {
    fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.href.trim().is_empty() {
            diag.error(Self::FIELDS.href, "must not be empty");
        }
    }
}
