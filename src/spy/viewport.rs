//! Vertical geometry: viewport, root band and heading boxes.

use serde::Deserialize;

use super::RootMargin;

/// Visible window onto the document, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
}

/// Vertical range that counts as "on screen" once the margin is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub top: f64,
    pub bottom: f64,
}

impl Viewport {
    pub fn new(scroll_top: f64, height: f64) -> Self {
        Self { scroll_top, height }
    }

    /// Viewport grown by the margin. Percentages resolve against the height;
    /// horizontal sides do not affect a vertical band.
    pub fn band(&self, margin: &RootMargin) -> Band {
        Band {
            top: self.scroll_top - margin.top.resolve(self.height),
            bottom: self.scroll_top + self.height + margin.bottom.resolve(self.height),
        }
    }
}

impl Band {
    /// A margin can shrink the band past zero height, leaving nothing visible.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top > self.bottom
    }
}

/// Laid-out position of one heading element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeadingBox {
    pub id: String,
    pub top: f64,
    #[serde(default)]
    pub height: f64,
}

impl HeadingBox {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Overlap test with edge contact counting as intersecting.
    pub fn intersects(&self, band: &Band) -> bool {
        !band.is_empty() && self.top <= band.bottom && self.bottom() >= band.top
    }
}
