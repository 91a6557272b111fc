//! GBFS station status HTTP client.

use std::time::Duration;

use tracing::debug;

use super::error::FeedError;
use super::types::StationStatusFeed;

/// Ford GoBike (Bay Wheels) station status feed.
pub const DEFAULT_FEED_URL: &str = "https://gbfs.fordgobike.com/gbfs/en/station_status.json";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// URL of the `station_status.json` document
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Whether to honour `HTTP_PROXY` and friends
    pub system_proxy: bool,
}

impl FeedConfig {
    /// Create a config for the given feed URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            system_proxy: true,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Connect directly, ignoring proxy environment variables.
    pub fn without_proxy(mut self) -> Self {
        self.system_proxy = false;
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL)
    }
}

/// Client for a GBFS station status feed.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
}

impl FeedClient {
    /// Create a new feed client.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs));
        if !config.system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            http: builder.build()?,
            url: config.url,
        })
    }

    /// The URL this client fetches.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the current station status.
    pub async fn fetch(&self) -> Result<StationStatusFeed, FeedError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let body = response.text().await?;

        let feed: StationStatusFeed =
            serde_json::from_str(&body).map_err(|e| FeedError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        debug!(
            url = %self.url,
            stations = feed.data.stations.len(),
            "fetched station status"
        );

        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::{Router, http::StatusCode, routing::get};

    use super::*;
    use crate::feed::mock::fixture_json;

    /// Serve a tiny upstream on an ephemeral port.
    async fn upstream() -> SocketAddr {
        let app = Router::new()
            .route(
                "/station_status.json",
                get(|| async {
                    (
                        [("content-type", "application/json")],
                        fixture_json(),
                    )
                }),
            )
            .route(
                "/down.json",
                get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
            )
            .route("/garbage.json", get(|| async { "<html>not json</html>" }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn client(addr: SocketAddr, path: &str) -> FeedClient {
        let config = FeedConfig::new(format!("http://{addr}{path}"))
            .with_timeout(5)
            .without_proxy();
        FeedClient::new(config).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = FeedConfig::default();
        assert_eq!(config.url, DEFAULT_FEED_URL);
        assert_eq!(config.timeout_secs, 10);
        assert!(config.system_proxy);
    }

    #[test]
    fn config_builders() {
        let config = FeedConfig::new("http://localhost:8080/status.json")
            .with_timeout(3)
            .without_proxy();
        assert_eq!(config.url, "http://localhost:8080/status.json");
        assert_eq!(config.timeout_secs, 3);
        assert!(!config.system_proxy);
    }

    #[tokio::test]
    async fn fetches_and_decodes() {
        let addr = upstream().await;
        let feed = client(addr, "/station_status.json").fetch().await.unwrap();

        assert_eq!(feed.data.stations.len(), 10);
        assert_eq!(feed.by_id()["126"].num_ebikes_available, 7);
    }

    #[tokio::test]
    async fn error_status_is_api_error() {
        let addr = upstream().await;
        let err = client(addr, "/down.json").fetch().await.unwrap_err();

        match err {
            FeedError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn not_found_is_api_error() {
        let addr = upstream().await;
        let err = client(addr, "/missing.json").fetch().await.unwrap_err();
        assert!(matches!(err, FeedError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn undecodable_body_is_json_error() {
        let addr = upstream().await;
        let err = client(addr, "/garbage.json").fetch().await.unwrap_err();

        match err {
            FeedError::Json { body, .. } => {
                assert_eq!(body.as_deref(), Some("<html>not json</html>"));
            }
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_upstream_is_http_error() {
        // Bind then drop to get a port nothing is listening on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(addr, "/station_status.json")
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, FeedError::Http(_)));
    }
}
