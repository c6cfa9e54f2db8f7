//! Embedded static resources for folio.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `scrollspy.js` - browser side of the active-section tracker
//!
//! # Usage
//!
//! ```ignore
//! use embed::{SCROLLSPY_JS, ScrollSpyVars};
//!
//! let js = SCROLLSPY_JS.render(&ScrollSpyVars::from_config(&config));
//! ```

mod template;

pub use template::{Template, TemplateVars, js_string};

use crate::config::SiteConfig;
use crate::spy::RootMargin;

/// Variables for scrollspy.js.
#[derive(Debug, Clone)]
pub struct ScrollSpyVars {
    pub root_margin: RootMargin,
    /// Selector collecting the observed headings.
    pub selector: String,
}

impl ScrollSpyVars {
    /// Build script variables from the `[toc]` section.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            root_margin: config.toc.root_margin,
            selector: config.toc.selector.clone(),
        }
    }
}

impl TemplateVars for ScrollSpyVars {
    fn apply(&self, content: &str) -> String {
        content
            .replace(
                "__FOLIO_ROOT_MARGIN__",
                &js_string(&self.root_margin.to_string()),
            )
            .replace("__FOLIO_SELECTOR__", &js_string(&self.selector))
    }
}

/// Scroll-spy JavaScript with margin and selector injection.
pub const SCROLLSPY_JS: Template<ScrollSpyVars> = Template::new(include_str!("scrollspy.js"));
