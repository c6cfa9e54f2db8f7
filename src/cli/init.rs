//! `folio init`: write a commented default configuration file.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::{BackLinkConfig, ShareConfig, SiteSectionConfig, TocConfig};
use crate::log;

/// Generate folio.toml content with comments.
pub fn generate_config_template() -> String {
    let mut out = format!(
        "# folio configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    );

    for section in [
        SiteSectionConfig::template_with_header(),
        BackLinkConfig::template_with_header(),
        TocConfig::template_with_header(),
        ShareConfig::template_with_header(),
    ] {
        out.push_str(&section);
        out.push('\n');
    }

    out
}

/// Write the default configuration to `path`.
///
/// An existing file is only replaced with `force`.
pub fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "'{}' already exists, use --force to overwrite",
            path.display()
        );
    }

    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_template_sections() {
        let content = generate_config_template();
        assert!(content.starts_with("# folio configuration file"));
        for header in ["[site]", "[site.back]", "[toc]", "[share]"] {
            assert!(content.contains(header), "missing {header}");
        }
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config = test_parse_config(&generate_config_template());
        assert!(config.toc.enable);
        assert_eq!(config.toc.selector, "h1, h2, h3");
        assert_eq!(config.toc.root_margin.to_string(), "0px 0px -40% 0px");
        assert_eq!(config.site.blog_path, "blog");
        assert_eq!(config.site.back.href, "/posts");
        assert!(config.share.twitter);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("folio.toml");

        write_config(&path, false).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[toc]"));
    }

    #[test]
    fn test_existing_config_needs_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "custom content").unwrap();

        let err = write_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "custom content");

        write_config(&path, true).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[site]"));
    }
}
