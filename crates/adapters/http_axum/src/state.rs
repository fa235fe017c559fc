//! Shared application state for axum handlers.

use std::sync::Arc;

use luxhub_app::ports::{ActionLogRepository, CommandPublisher, ReadingRepository};
use luxhub_app::services::light_service::LightService;
use luxhub_app::services::stats_service::StatsService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and publisher types to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are
/// cloned.
pub struct AppState<RR, AR, CP> {
    /// Aggregate statistics over the append-only logs.
    pub stats_service: Arc<StatsService<RR, AR>>,
    /// Manual light control.
    pub light_service: Arc<LightService<CP>>,
}

impl<RR, AR, CP> Clone for AppState<RR, AR, CP> {
    fn clone(&self) -> Self {
        Self {
            stats_service: Arc::clone(&self.stats_service),
            light_service: Arc::clone(&self.light_service),
        }
    }
}

impl<RR, AR, CP> AppState<RR, AR, CP>
where
    RR: ReadingRepository + Send + Sync + 'static,
    AR: ActionLogRepository + Send + Sync + 'static,
    CP: CommandPublisher + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(stats_service: StatsService<RR, AR>, light_service: LightService<CP>) -> Self {
        Self {
            stats_service: Arc::new(stats_service),
            light_service: Arc::new(light_service),
        }
    }
}
