//! The one request this service answers.
//!
//! Both entry points (the local server and the gateway function) normalise
//! their input into a [`StatusRequest`] and deliver the resulting [`Page`].

use tracing::{debug, error};

use crate::availability::{TierThresholds, populate};
use crate::directory::REGIONS;
use crate::feed::FeedSource;
use crate::render::{OutputFormat, Page};

/// Body of the 500 returned when the feed can't be fetched or decoded.
pub const FETCH_FAILED: &str = "Get Status Failed";

/// Body of the 500 returned when rendering fails.
pub const RENDER_FAILED: &str = "Template Error";

/// The parts of an incoming request that affect the response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRequest {
    pub accept: Option<String>,
    pub user_agent: Option<String>,
}

impl StatusRequest {
    /// Which format the client should get.
    pub fn format(&self) -> OutputFormat {
        OutputFormat::negotiate(self.accept.as_deref(), self.user_agent.as_deref())
    }
}

/// Fetch live status, join it with the directory and render a page.
///
/// Never fails: upstream and template errors become a 500 page.
pub async fn handle<F: FeedSource>(
    source: &F,
    thresholds: &TierThresholds,
    request: &StatusRequest,
) -> Page {
    let format = request.format();

    let feed = match source.fetch().await {
        Ok(feed) => feed,
        Err(e) => {
            error!(error = %e, "get station status failed");
            return Page::error(500, FETCH_FAILED);
        }
    };

    let report = populate(REGIONS, &feed, thresholds);
    debug!(
        ?format,
        feed_stations = feed.data.stations.len(),
        "built availability report"
    );

    match format.render(&report) {
        Ok(body) => Page::ok(format, body),
        Err(e) => {
            error!(error = %e, ?format, "render failed");
            Page::error(500, RENDER_FAILED)
        }
    }
}
