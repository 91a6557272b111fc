//! Canned feed for tests.

use super::error::FeedError;
use super::types::StationStatusFeed;
use super::FeedSource;

const FIXTURE: &str = include_str!("../../fixtures/station_status.json");

/// The sample feed in `fixtures/station_status.json`.
pub fn fixture() -> StationStatusFeed {
    serde_json::from_str(FIXTURE).expect("fixture should parse")
}

/// Raw text of the sample feed.
pub fn fixture_json() -> &'static str {
    FIXTURE
}

/// A feed source that always returns the same thing.
///
/// `None` behaves like an upstream outage.
#[derive(Debug, Clone)]
pub struct MockFeed {
    feed: Option<StationStatusFeed>,
}

impl MockFeed {
    /// Serve the sample feed.
    pub fn fixture() -> Self {
        Self::with(fixture())
    }

    /// Serve the given feed.
    pub fn with(feed: StationStatusFeed) -> Self {
        Self { feed: Some(feed) }
    }

    /// Fail every fetch.
    pub fn unavailable() -> Self {
        Self { feed: None }
    }
}

impl FeedSource for MockFeed {
    async fn fetch(&self) -> Result<StationStatusFeed, FeedError> {
        self.feed.clone().ok_or_else(|| FeedError::Api {
            status: 503,
            message: "mock feed unavailable".to_string(),
        })
    }
}
