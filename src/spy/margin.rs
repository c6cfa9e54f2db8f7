//! CSS root margin (`"0px 0px -40% 0px"`) applied to the viewport before
//! testing intersection.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Margin used when none is configured: the bottom 40% of the viewport never
/// activates a heading.
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -40% 0px";

/// One side of a root margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    /// Percentage of the viewport extent along the same axis.
    Percent(f64),
}

impl Length {
    /// Absolute offset in pixels for a viewport of the given extent.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Percent(pct) => extent * pct / 100.0,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

impl FromStr for Length {
    type Err = MarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MarginError::InvalidLength(s.to_string());
        let number = |n: &str| n.parse::<f64>().ok().filter(|v| v.is_finite());

        if let Some(n) = s.strip_suffix("px") {
            number(n).map(Self::Px).ok_or_else(invalid)
        } else if let Some(n) = s.strip_suffix('%') {
            number(n).map(Self::Percent).ok_or_else(invalid)
        } else if number(s) == Some(0.0) {
            Ok(Self::Px(0.0))
        } else {
            Err(invalid())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarginError {
    #[error("root margin is empty")]
    Empty,
    #[error("root margin takes 1 to 4 values, got {0}")]
    TooManyValues(usize),
    #[error("invalid length `{0}`: expected `<n>px`, `<n>%` or `0`")]
    InvalidLength(String),
}

/// Offsets grown (positive) or shrunk (negative) on each side of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootMargin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl RootMargin {
    pub const ZERO: Self = Self::uniform(Length::Px(0.0));

    pub const fn uniform(length: Length) -> Self {
        Self {
            top: length,
            right: length,
            bottom: length,
            left: length,
        }
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self {
            bottom: Length::Percent(-40.0),
            ..Self::ZERO
        }
    }
}

impl FromStr for RootMargin {
    type Err = MarginError;

    /// CSS shorthand: `all`, `vertical horizontal`, `top horizontal bottom`
    /// or `top right bottom left`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(Length::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        match values[..] {
            [] => Err(MarginError::Empty),
            [all] => Ok(Self::uniform(all)),
            [vertical, horizontal] => Ok(Self {
                top: vertical,
                right: horizontal,
                bottom: vertical,
                left: horizontal,
            }),
            [top, horizontal, bottom] => Ok(Self {
                top,
                right: horizontal,
                bottom,
                left: horizontal,
            }),
            [top, right, bottom, left] => Ok(Self {
                top,
                right,
                bottom,
                left,
            }),
            _ => Err(MarginError::TooManyValues(values.len())),
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

impl TryFrom<String> for RootMargin {
    type Error = MarginError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RootMargin> for String {
    fn from(margin: RootMargin) -> Self {
        margin.to_string()
    }
}
