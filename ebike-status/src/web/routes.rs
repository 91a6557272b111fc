//! HTTP route handlers.

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::feed::FeedSource;
use crate::handler::{self, StatusRequest};
use crate::render::Page;

use super::state::AppState;

/// Create the application router.
pub fn create_router<F: FeedSource + 'static>(state: AppState<F>) -> Router {
    Router::new()
        .route("/", get(status_page::<F>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Station status page.
async fn status_page<F: FeedSource>(
    State(state): State<AppState<F>>,
    headers: HeaderMap,
) -> Page {
    let request = status_request(&headers);
    handler::handle(state.feed.as_ref(), &state.thresholds, &request).await
}

/// Pull the negotiation headers out of an axum request.
fn status_request(headers: &HeaderMap) -> StatusRequest {
    let get = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };

    StatusRequest {
        accept: get(header::ACCEPT),
        user_agent: get(header::USER_AGENT),
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            [
                (header::CONTENT_TYPE, self.content_type),
                (header::VARY, "Accept, User-Agent"),
            ],
            self.body,
        )
            .into_response()
    }
}
