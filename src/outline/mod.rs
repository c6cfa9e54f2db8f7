//! Heading outline: the nested table of contents of a post.
//!
//! The content pipeline hands over a flat list of headings, each annotated
//! with its depth. [`build_outline`] turns that list into a forest rooted at
//! the depth-1 headings. The forest is rebuilt from scratch whenever the
//! list changes; nodes carry no identity across rebuilds.
//!
//! ```ignore
//! let forest = build_outline(&[
//!     HeadingEntry::new("a", 1, "A"),
//!     HeadingEntry::new("b", 2, "B"),
//!     HeadingEntry::new("c", 1, "C"),
//! ]);
//! assert_eq!(forest.len(), 2);
//! assert_eq!(forest[0].children[0].id(), "b");
//! ```

mod heading;
mod tree;


pub use heading::HeadingEntry;
pub use tree::{OutlineNode, build_outline, count, walk};
