//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module  | TOML Section              | Purpose                         |
//! |---------|---------------------------|---------------------------------|
//! | `site`  | `[site]`, `[site.back]`   | Site URL, locale, blog path     |
//! | `toc`   | `[toc]`                   | Table of contents, scroll spy   |
//! | `share` | `[share]`                 | Share links                     |

mod share;
pub mod site;
mod toc;

pub use share::ShareConfig;
pub use site::{BackLinkConfig, SiteSectionConfig};
pub use toc::TocConfig;
