//! `folio render`: post bundle to HTML page.

use anyhow::{Context, Result};
use std::{fs, io::Write, path::Path};

use super::args::RenderArgs;
use crate::config::SiteConfig;
use crate::layout::{PostBundle, PostLayout};
use crate::log;

pub fn run_render(args: &RenderArgs, config: &SiteConfig) -> Result<()> {
    let html = render_page(&args.bundle, config, args.active.as_deref())?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create '{}'", parent.display()))?;
            }
            fs::write(path, &html)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("render"; "wrote {}", path.display());
        }
        None => std::io::stdout().lock().write_all(html.as_bytes())?,
    }

    Ok(())
}

/// Load a bundle and lay it out as a full page.
pub fn render_page(bundle: &Path, config: &SiteConfig, active: Option<&str>) -> Result<String> {
    let bundle = PostBundle::load(bundle)?;
    Ok(PostLayout::new(config).render(&bundle, active)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const BUNDLE: &str = r#"{
        "front_matter": { "slug": "hello", "date": "2023-03-04", "title": "Hello" },
        "toc": [
            { "id": "intro", "depth": 1, "title": "Intro" },
            { "id": "details", "depth": 2, "title": "Details" }
        ],
        "body": "<h1 id=\"intro\">Intro</h1>"
    }"#;

    #[test]
    fn test_render_to_file() {
        let temp = TempDir::new().unwrap();
        let bundle = temp.path().join("hello.json");
        fs::write(&bundle, BUNDLE).unwrap();
        let output = temp.path().join("out/hello.html");

        let args = RenderArgs {
            bundle,
            output: Some(output.clone()),
            active: Some("details".into()),
        };
        run_render(&args, &test_parse_config("")).unwrap();

        let html = fs::read_to_string(output).unwrap();
        assert!(html.contains("<h1 class=\"post-title\">Hello</h1>"));
        assert!(html.contains(r#"<li data-toc-id="details" class="toc-active">"#));
    }

    #[test]
    fn test_missing_bundle() {
        let err = render_page(
            &PathBuf::from("/nonexistent/post.json"),
            &test_parse_config(""),
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("post.json"));
    }

    #[test]
    fn test_invalid_date_surfaces() {
        let temp = TempDir::new().unwrap();
        let bundle = temp.path().join("bad.json");
        fs::write(&bundle, BUNDLE.replace("2023-03-04", "soon")).unwrap();

        let err = render_page(&bundle, &test_parse_config(""), None).unwrap_err();
        assert!(err.to_string().contains("invalid date"));
    }
}
