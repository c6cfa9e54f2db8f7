//! Owned tracker state and the active-heading update rule.

use rustc_hash::FxHashMap;

use super::IntersectionRecord;
use crate::debug;

/// Everything the tracker remembers between batches.
///
/// Registered ids keep the document order they were mounted in. The record
/// map holds the latest report per id and lives as long as the observation.
#[derive(Debug, Clone, Default)]
pub struct SpyState {
    ids: Vec<String>,
    order: FxHashMap<String, usize>,
    records: FxHashMap<String, IntersectionRecord>,
    active: Option<String>,
}

impl SpyState {
    /// Register heading ids in document order. Repeated ids keep their first
    /// position.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self::default();
        for id in ids {
            let id = id.into();
            if state.order.contains_key(&id) {
                debug!("spy"; "heading `{}` registered twice, keeping first", id);
                continue;
            }
            state.order.insert(id.clone(), state.ids.len());
            state.ids.push(id);
        }
        state
    }

    #[inline]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Registered ids in document order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    #[inline]
    pub fn registered(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_registered(&self, id: &str) -> bool {
        self.order.contains_key(id)
    }

    /// Document-order index of a registered id.
    #[inline]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.order.get(id).copied()
    }

    /// Ids whose latest record is intersecting, in document order.
    pub fn intersecting(&self) -> Vec<&str> {
        let mut visible: Vec<(usize, &str)> = self
            .records
            .values()
            .filter(|record| record.is_intersecting)
            .filter_map(|record| Some((self.position(&record.id)?, record.id.as_str())))
            .collect();
        visible.sort_unstable_by_key(|&(index, _)| index);
        visible.into_iter().map(|(_, id)| id).collect()
    }

    /// Merge a batch of reports and recompute the active heading.
    ///
    /// The winner is the intersecting heading with the lowest document-order
    /// index over the whole record map, not only this batch. With nothing
    /// intersecting the previous active id is kept.
    #[must_use]
    pub fn update(mut self, batch: &[IntersectionRecord]) -> Self {
        for record in batch {
            if !self.is_registered(&record.id) {
                debug!("spy"; "ignoring report for unregistered heading `{}`", record.id);
                continue;
            }
            self.records.insert(record.id.clone(), record.clone());
        }

        let winner = self
            .records
            .values()
            .filter(|record| record.is_intersecting)
            .filter_map(|record| Some((self.position(&record.id)?, &record.id)))
            .min_by_key(|&(index, _)| index)
            .map(|(_, id)| id.clone());

        if let Some(id) = winner {
            if self.active.as_deref() != Some(id.as_str()) {
                debug!("spy"; "active heading: {}", id);
            }
            self.active = Some(id);
        }

        self
    }
}
