//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site], [site.back]
//! │   ├── toc        # [toc]
//! │   └── share      # [share]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section        | Purpose                                        |
//! |----------------|------------------------------------------------|
//! | `[site]`       | Title, public URL, date locale, blog path      |
//! | `[site.back]`  | Back link at the end of a post                 |
//! | `[toc]`        | Table of contents, root margin, selector       |
//! | `[share]`      | Share links                                    |

pub mod section;
pub mod types;
mod util;

use util::resolve_config_file;

pub use section::{BackLinkConfig, ShareConfig, SiteSectionConfig, TocConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{debug, log};
use anyhow::{Context, Error, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Path of the loaded config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site metadata and back link
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Table of contents and scroll spy
    #[serde(default)]
    pub toc: TocConfig,

    /// Share links
    #[serde(default)]
    pub share: ShareConfig,
}

/// Config file name searched for when `-C` is not given.
pub const CONFIG_FILE: &str = "folio.toml";

impl SiteConfig {
    /// Load configuration for a run in the current directory.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        Self::load_from(&cwd, explicit)
    }

    /// Load configuration for a run started in `start`.
    ///
    /// An explicitly named file must exist. Without one, `folio.toml` is
    /// searched upward and a missing file means defaults. The result is
    /// always validated.
    pub fn load_from(start: &Path, explicit: Option<&Path>) -> Result<Self> {
        let config = match resolve_config_file(start, explicit)? {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "{CONFIG_FILE} not found, using defaults");
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Public URL of a post: `<site.url>/<blog_path>/<slug>`.
    pub fn post_url(&self, slug: &str) -> Option<String> {
        let base = self.site.base_url()?;
        Some(format!("{base}{}", self.post_path(slug)))
    }

    /// Site-relative path of a post: `/<blog_path>/<slug>`.
    pub fn post_path(&self, slug: &str) -> String {
        match self.site.blog_path() {
            "" => format!("/{slug}"),
            blog => format!("/{blog}/{slug}"),
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once. Warnings are
    /// printed and never fail.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate_field_status(&mut diag);
        self.toc.validate_field_status(&mut diag);
        self.share.validate_field_status(&mut diag);

        self.site.validate(&self.share, &mut diag);
        self.toc.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

impl FromStr for SiteConfig {
    type Err = Error;

    /// Parse configuration from a TOML string, ignoring unknown fields.
    fn from_str(content: &str) -> Result<Self> {
        Ok(Self::parse_with_ignored(content)?.0)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_default_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load_from(dir.path(), None).unwrap();
        assert!(config.config_path.as_os_str().is_empty());
        assert!(config.toc.enable);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = SiteConfig::load_from(dir.path(), Some(Path::new("missing.toml"))).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), "[toc]\nenable = false").unwrap();

        let config = SiteConfig::load_from(dir.path(), Some(Path::new("site.toml"))).unwrap();
        assert!(!config.toc.enable);
        assert_eq!(config.config_path, dir.path().join("site.toml"));
    }

    #[test]
    fn test_defaults_validate() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let content = "[toc]\nenable = false\ncolour = \"red\"\n[extra]\nx = 1";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(!config.toc.enable);
        assert_eq!(ignored, vec!["toc.colour", "extra"]);
    }

    #[test]
    fn test_from_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(&path, "[site]\nurl = \"https://example.com\"\nlocale = \"en-GB\"").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.site.locale, "en-GB");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = SiteConfig::from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }

    #[test]
    fn test_syntax_error() {
        let err = "[site\n".parse::<SiteConfig>().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_validation_collects_every_error() {
        let config = test_parse_config(
            "[site]\nurl = \"mailto:someone\"\nblog_path = \"a b\"\n\n[toc]\nselector = \"\"",
        );
        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err}");
        };
        let fields: Vec<_> = diag.errors().iter().map(|d| d.field.as_str()).collect();
        assert!(fields.contains(&"site.url"));
        assert!(fields.contains(&"site.blog_path"));
        assert!(fields.contains(&"toc.selector"));
    }

    #[test]
    fn test_post_url() {
        let config = test_parse_config("[site]\nurl = \"https://example.com/\"");
        assert_eq!(config.post_path("hello"), "/blog/hello");
        assert_eq!(
            config.post_url("hello").as_deref(),
            Some("https://example.com/blog/hello")
        );

        let config = test_parse_config("[site]\nblog_path = \"\"");
        assert_eq!(config.post_path("hello"), "/hello");
        assert_eq!(config.post_url("hello"), None);
    }
}
