//! Outline rendering.
//!
//! - [`render_outline`]: pure render model, only the active path expanded
//! - [`toc_html`]: TOC markup for the post page
//! - [`outline_text`]: indented text for the terminal

mod html;
mod outline;
mod text;

pub use html::{ACTIVE_CLASS, LIST_CLASS, toc_html};
pub use outline::{RenderNode, is_active, render_outline};
pub use text::outline_text;
