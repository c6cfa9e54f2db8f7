use serde::{Deserialize, Serialize};

/// Latest intersection report for one heading element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntersectionRecord {
    pub id: String,
    pub is_intersecting: bool,
}

impl IntersectionRecord {
    pub fn new(id: impl Into<String>, is_intersecting: bool) -> Self {
        Self {
            id: id.into(),
            is_intersecting,
        }
    }

    #[inline]
    pub fn visible(id: impl Into<String>) -> Self {
        Self::new(id, true)
    }

    #[inline]
    pub fn hidden(id: impl Into<String>) -> Self {
        Self::new(id, false)
    }
}
