//! Command-line and environment configuration.

use std::net::SocketAddr;

use clap::Parser;

use crate::availability::{InvalidThresholds, TierThresholds};
use crate::feed::{DEFAULT_FEED_URL, DEFAULT_TIMEOUT_SECS, FeedConfig};

/// Default address for `--local`.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:1234";

/// E-bike availability for a handful of bike-share docks.
///
/// Runs as an API Gateway function by default; pass `--local` to serve
/// over HTTP instead.
#[derive(Debug, Clone, Parser)]
#[command(name = "ebike-status", version)]
pub struct Config {
    /// Run a local HTTP server instead of the serverless runtime
    #[arg(long, env = "EBIKE_LOCAL")]
    pub local: bool,

    /// Host/port to listen on with --local
    #[arg(long, env = "EBIKE_LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// GBFS station_status.json URL
    #[arg(long, env = "EBIKE_FEED_URL", default_value = DEFAULT_FEED_URL)]
    pub feed_url: String,

    /// Upstream request timeout in seconds
    #[arg(long, env = "EBIKE_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Ignore HTTP_PROXY/HTTPS_PROXY when fetching the feed
    #[arg(long, env = "EBIKE_NO_PROXY")]
    pub no_proxy: bool,

    /// Minimum e-bikes for a green row
    #[arg(long, env = "EBIKE_GREEN_AT", default_value_t = 3)]
    pub green_at: u32,

    /// Minimum e-bikes for a yellow row
    #[arg(long, env = "EBIKE_YELLOW_AT", default_value_t = 1)]
    pub yellow_at: u32,
}

impl Config {
    /// Feed client settings.
    pub fn feed_config(&self) -> FeedConfig {
        let config = FeedConfig::new(&self.feed_url).with_timeout(self.timeout_secs);
        if self.no_proxy {
            config.without_proxy()
        } else {
            config
        }
    }

    /// Validated tier thresholds.
    pub fn thresholds(&self) -> Result<TierThresholds, InvalidThresholds> {
        TierThresholds::new(self.green_at, self.yellow_at)
    }
}
