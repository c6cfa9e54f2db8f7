//! Tracker lifecycle: mount, handle batches, tear down.

use super::{IntersectionHost, IntersectionRecord, SpyState};
use crate::debug;

/// Active-heading tracker bound to one host for one page view.
///
/// Dropping the tracker tears it down, so the host is never left observing
/// past the view's lifetime.
pub struct Tracker<H: IntersectionHost> {
    host: H,
    state: SpyState,
    live: bool,
}

impl<H: IntersectionHost> Tracker<H> {
    /// Register every heading id with the host, in document order.
    pub fn mount<I, S>(mut host: H, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let state = SpyState::new(ids);
        for id in state.ids() {
            host.observe(id);
        }
        debug!("spy"; "observing {} heading(s)", state.registered());

        Self {
            host,
            state,
            live: true,
        }
    }

    /// Feed one batch of reports and return the active id.
    ///
    /// Batches arriving after teardown are ignored.
    pub fn handle(&mut self, batch: &[IntersectionRecord]) -> Option<&str> {
        if self.live {
            let state = std::mem::take(&mut self.state);
            self.state = state.update(batch);
        }
        self.state.active()
    }

    #[inline]
    pub fn active(&self) -> Option<&str> {
        self.state.active()
    }

    #[inline]
    pub fn state(&self) -> &SpyState {
        &self.state
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Stop observation. Only the first call reaches the host.
    pub fn teardown(&mut self) {
        if !self.live {
            return;
        }
        self.live = false;
        self.host.disconnect();
        debug!("spy"; "observation stopped");
    }
}

impl<H: IntersectionHost> Drop for Tracker<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
