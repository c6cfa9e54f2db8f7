//! Post page layout.
//!
//! Turns a [`PostBundle`] into one HTML page: header with date and reading
//! time, authors, body, share link, tags, neighbour links, back link and
//! the table of contents with its scroll spy.
//!
//! ```ignore
//! let bundle = PostBundle::load(Path::new("post.json"))?;
//! let html = PostLayout::new(&config).render(&bundle, None)?;
//! ```

mod bundle;
pub mod links;
mod page;

#[cfg(test)]
mod tests;

pub use bundle::{Author, FrontMatter, PostBundle, PostLink};
pub use page::{LayoutError, PostLayout};
