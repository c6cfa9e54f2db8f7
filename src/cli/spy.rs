//! `folio spy`: replay a scroll trace through the active-heading tracker.
//!
//! A trace is a JSON file with the laid-out heading boxes and a list of
//! scroll offsets:
//!
//! ```json
//! {
//!   "viewport_height": 1000,
//!   "headings": [{ "id": "intro", "top": 0, "height": 40 }],
//!   "scroll": [0, 250, 900]
//! }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, io::Write, path::Path};

use super::args::SpyArgs;
use crate::config::SiteConfig;
use crate::debug;
use crate::spy::{HeadingBox, LayoutHost, RootMargin, Tracker};

#[derive(Debug, Clone, Deserialize)]
pub struct Trace {
    pub viewport_height: f64,
    pub headings: Vec<HeadingBox>,
    #[serde(default)]
    pub scroll: Vec<f64>,
}

impl Trace {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read trace '{}'", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse trace '{}'", path.display()))
    }
}

pub fn run_spy(args: &SpyArgs, config: &SiteConfig) -> Result<()> {
    let margin = match &args.root_margin {
        Some(raw) => raw
            .parse::<RootMargin>()
            .with_context(|| format!("Invalid --root-margin '{raw}'"))?,
        None => config.toc.root_margin,
    };

    let trace = Trace::load(&args.trace)?;
    let mut stdout = std::io::stdout().lock();
    for line in run_trace(&trace, margin) {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

/// Mount a tracker over the trace's layout and record the active heading
/// after each scroll step.
pub fn run_trace(trace: &Trace, margin: RootMargin) -> Vec<String> {
    let host = LayoutHost::new(trace.headings.clone(), trace.viewport_height, margin);
    let ids = host.heading_ids();
    let mut tracker = Tracker::mount(host, ids);
    debug!("spy"; "root margin {}", margin);

    let lines = trace
        .scroll
        .iter()
        .map(|&y| {
            let batch = tracker.host_mut().scroll_to(y);
            let active = tracker.handle(&batch).unwrap_or("-");
            format!("scroll={y} active={active}")
        })
        .collect();

    tracker.teardown();
    lines
}
