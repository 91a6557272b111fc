//! Local HTTP server.
//!
//! Serves the status page with axum when running outside the gateway.

mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
