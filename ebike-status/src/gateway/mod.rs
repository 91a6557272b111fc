//! Serverless entry point behind an API Gateway proxy integration.

mod types;

use lambda_runtime::LambdaEvent;
use tracing::info;

use crate::feed::FeedSource;
use crate::handler;
use crate::web::AppState;

pub use types::{ProxyRequest, ProxyResponse};

/// Handle one gateway invocation.
///
/// Upstream failures are reported as a 500 response, never as a function
/// error, so the gateway passes them straight to the client.
pub async fn handle_event<F: FeedSource>(
    state: &AppState<F>,
    event: LambdaEvent<ProxyRequest>,
) -> Result<ProxyResponse, lambda_runtime::Error> {
    let (request, context) = event.into_parts();

    let page = handler::handle(
        state.feed.as_ref(),
        &state.thresholds,
        &request.to_status_request(),
    )
    .await;

    info!(
        request_id = %context.request_id,
        method = request.http_method.as_deref().unwrap_or("-"),
        path = request.path.as_deref().unwrap_or("-"),
        query_params = request.query_string_parameters.len(),
        status = page.status,
        "gateway request"
    );

    let mut response = ProxyResponse::from(page);
    if request.is_head() {
        response.body.clear();
    }
    Ok(response)
}
