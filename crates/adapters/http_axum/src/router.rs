//! HTTP router assembly.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use luxhub_app::ports::{ActionLogRepository, CommandPublisher, ReadingRepository};

use crate::api;
use crate::state::AppState;

/// Builds the application router with all routes and middleware.
pub fn build<RR, AR, CP>(state: AppState<RR, AR, CP>) -> Router
where
    RR: ReadingRepository + Send + Sync + 'static,
    AR: ActionLogRepository + Send + Sync + 'static,
    CP: CommandPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/stats", get(api::stats::get_stats::<RR, AR, CP>))
        .route("/api/light/{room}", post(api::light::set_light::<RR, AR, CP>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe. Returns a bare `OK` so load balancers need no JSON
/// parsing.
async fn health() -> &'static str {
    "OK"
}
