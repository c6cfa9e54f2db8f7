//! Active-section tracking (scroll spy).
//!
//! A host reports which heading elements intersect the viewport, in batches.
//! [`SpyState::update`] folds each batch into a persistent record map and
//! picks the single active heading:
//!
//! - one heading intersecting: it becomes active
//! - several: the earliest in document order wins
//! - none: the previous active heading stays
//!
//! [`Tracker`] owns the state and the host for one page view. [`LayoutHost`]
//! is a host driven by heading geometry and a scroll position; the browser
//! counterpart lives in `embed/scrollspy.js`.

mod host;
mod margin;
mod record;
mod state;
mod tracker;
mod viewport;


pub use host::{IntersectionHost, LayoutHost};
pub use margin::{DEFAULT_ROOT_MARGIN, Length, MarginError, RootMargin};
pub use record::IntersectionRecord;
pub use state::SpyState;
pub use tracker::Tracker;
pub use viewport::{Band, HeadingBox, Viewport};
