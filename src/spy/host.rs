//! Host environments that watch heading elements.

use rustc_hash::FxHashMap;

use super::{HeadingBox, IntersectionRecord, RootMargin, Viewport};

/// Something that can watch heading elements for viewport intersection.
///
/// The tracker registers every heading once at mount and disconnects once at
/// teardown. Reports flow back through [`super::Tracker::handle`].
pub trait IntersectionHost {
    /// Start watching the element with this id.
    fn observe(&mut self, id: &str);

    /// Stop watching every element.
    fn disconnect(&mut self);
}

/// Host that computes intersections from laid-out heading boxes.
///
/// Mirrors what a browser observer reports: the first scroll after
/// `observe` delivers a record for every observed heading, later scrolls
/// deliver only headings whose state changed.
#[derive(Debug, Clone)]
pub struct LayoutHost {
    boxes: Vec<HeadingBox>,
    index: FxHashMap<String, usize>,
    viewport_height: f64,
    margin: RootMargin,
    observed: Vec<String>,
    last: FxHashMap<String, bool>,
    connected: bool,
}

impl LayoutHost {
    pub fn new(boxes: Vec<HeadingBox>, viewport_height: f64, margin: RootMargin) -> Self {
        let index = boxes
            .iter()
            .enumerate()
            .map(|(i, b)| (b.id.clone(), i))
            .collect();

        Self {
            boxes,
            index,
            viewport_height,
            margin,
            observed: Vec::new(),
            last: FxHashMap::default(),
            connected: false,
        }
    }

    /// Heading ids in layout order, for mounting a tracker.
    pub fn heading_ids(&self) -> Vec<String> {
        self.boxes.iter().map(|b| b.id.clone()).collect()
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    #[inline]
    pub fn observed(&self) -> &[String] {
        &self.observed
    }

    /// Scroll to `scroll_top` and collect the resulting reports.
    pub fn scroll_to(&mut self, scroll_top: f64) -> Vec<IntersectionRecord> {
        if !self.connected {
            return Vec::new();
        }

        let band = Viewport::new(scroll_top, self.viewport_height).band(&self.margin);
        let mut batch = Vec::new();

        for id in &self.observed {
            let Some(&i) = self.index.get(id) else {
                continue;
            };
            let now = self.boxes[i].intersects(&band);
            if self.last.insert(id.clone(), now) != Some(now) {
                batch.push(IntersectionRecord::new(id.as_str(), now));
            }
        }

        batch
    }
}

impl IntersectionHost for LayoutHost {
    fn observe(&mut self, id: &str) {
        self.connected = true;
        if !self.observed.iter().any(|o| o == id) {
            self.observed.push(id.to_string());
        }
    }

    fn disconnect(&mut self) {
        self.connected = false;
        self.observed.clear();
        self.last.clear();
    }
}
