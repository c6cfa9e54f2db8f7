//! `folio outline`: print the heading tree of a post bundle.

use anyhow::Result;
use std::io::Write;

use super::args::OutlineArgs;
use crate::layout::PostBundle;
use crate::outline::build_outline;
use crate::render::{outline_text, render_outline};

pub fn run_outline(args: &OutlineArgs) -> Result<()> {
    let bundle = PostBundle::load(&args.bundle)?;
    let out = format_outline(&bundle, args.json, args.active.as_deref())?;
    std::io::stdout().lock().write_all(out.as_bytes())?;
    Ok(())
}

/// Outline of `bundle` as indented text, or as the render tree in JSON.
pub fn format_outline(bundle: &PostBundle, json: bool, active: Option<&str>) -> Result<String> {
    let forest = build_outline(&bundle.toc);

    if json {
        let mut out = serde_json::to_string_pretty(&render_outline(&forest, active))?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(outline_text(&forest, active))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> PostBundle {
        serde_json::from_str(
            r#"{
                "front_matter": { "slug": "s", "date": "2023-01-01", "title": "T" },
                "toc": [
                    { "id": "a", "depth": 1, "title": "A" },
                    { "id": "b", "depth": 2, "title": "B" },
                    { "id": "deep", "depth": 3, "title": "Deep" },
                    { "id": "c", "depth": 1, "title": "C" }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_text_outline() {
        let out = format_outline(&bundle(), false, Some("b")).unwrap();
        assert_eq!(out, "* A (#a)\n  * B (#b)\n    - Deep (#deep)\n- C (#c)\n");
    }

    #[test]
    fn test_json_outline_collapses_inactive() {
        let out = format_outline(&bundle(), true, Some("c")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        let roots = value.as_array().unwrap();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0]["id"], "a");
        assert_eq!(roots[0]["active"], false);
        assert!(roots[0]["children"].as_array().unwrap().is_empty());
        assert_eq!(roots[1]["href"], "#c");
        assert_eq!(roots[1]["active"], true);
    }
}
