//! GBFS station status feed.
//!
//! Fetches the operator's `station_status.json` and decodes it into
//! [`StationStatusFeed`]. One request per page view; nothing is cached.

mod client;
mod error;
#[cfg(test)]
pub mod mock;
mod types;

use std::future::Future;

pub use client::{DEFAULT_FEED_URL, DEFAULT_TIMEOUT_SECS, FeedClient, FeedConfig};
pub use error::FeedError;
pub use types::{StationService, StationStatus, StationStatusData, StationStatusFeed};

/// Source of station status.
///
/// Abstracts the upstream fetch so the request handler can be exercised
/// with canned data.
pub trait FeedSource: Send + Sync {
    /// Fetch the current station status.
    fn fetch(&self) -> impl Future<Output = Result<StationStatusFeed, FeedError>> + Send;
}

impl FeedSource for FeedClient {
    fn fetch(&self) -> impl Future<Output = Result<StationStatusFeed, FeedError>> + Send {
        FeedClient::fetch(self)
    }
}
