use std::net::SocketAddr;

use clap::Parser;
use lambda_runtime::service_fn;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ebike_status::config::Config;
use ebike_status::feed::{FeedClient, FeedSource};
use ebike_status::gateway;
use ebike_status::web::{AppState, create_router};

const DEFAULT_LOG_FILTER: &str = "ebike_status=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let config = Config::parse();
    init_tracing(config.local);

    let thresholds = config.thresholds()?;
    let feed = FeedClient::new(config.feed_config())?;
    info!(
        feed_url = feed.url(),
        green_at = thresholds.green_at,
        yellow_at = thresholds.yellow_at,
        "configured"
    );

    let state = AppState::new(feed, thresholds);

    if config.local {
        serve_local(state, config.listen_addr).await
    } else {
        run_gateway(state).await
    }
}

/// Log to stderr, filtered by `RUST_LOG`.
///
/// CloudWatch timestamps every line and doesn't render colour, so the
/// serverless runtime gets neither.
fn init_tracing(local: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if local {
        builder.init();
    } else {
        builder.with_ansi(false).without_time().init();
    }
}

async fn serve_local<F: FeedSource + 'static>(
    state: AppState<F>,
    addr: SocketAddr,
) -> Result<(), lambda_runtime::Error> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Ebike status listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn run_gateway<F: FeedSource + 'static>(
    state: AppState<F>,
) -> Result<(), lambda_runtime::Error> {
    info!("starting serverless runtime");
    lambda_runtime::run(service_fn(move |event| {
        let state = state.clone();
        async move { gateway::handle_event(&state, event).await }
    }))
    .await
}
