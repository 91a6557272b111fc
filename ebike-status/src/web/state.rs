//! Application state shared by both entry points.

use std::sync::Arc;

use crate::availability::TierThresholds;

/// Shared application state.
pub struct AppState<F> {
    /// Where station status comes from
    pub feed: Arc<F>,

    /// Colour tier boundaries
    pub thresholds: TierThresholds,
}

impl<F> AppState<F> {
    /// Create a new app state.
    pub fn new(feed: F, thresholds: TierThresholds) -> Self {
        Self {
            feed: Arc::new(feed),
            thresholds,
        }
    }
}

// Manual impl: cloning shares the feed, so `F` itself needn't be `Clone`.
impl<F> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            feed: Arc::clone(&self.feed),
            thresholds: self.thresholds,
        }
    }
}
