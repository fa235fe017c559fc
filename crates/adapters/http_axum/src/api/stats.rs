//! `GET /stats` handler.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use luxhub_app::ports::{ActionLogRepository, CommandPublisher, ReadingRepository};
use luxhub_domain::action_log::ActionLog;

use crate::error::ApiError;
use crate::state::AppState;

/// Aggregate statistics response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    total_readings: u64,
    total_actions: u64,
    energy_saving_percent: u8,
    recent: Vec<ActionLog>,
}

/// Returns counts, the energy-saving percentage, and the most recent
/// action logs.
pub async fn get_stats<RR, AR, CP>(
    State(state): State<AppState<RR, AR, CP>>,
) -> Result<Json<StatsResponse>, ApiError>
where
    RR: ReadingRepository + Send + Sync + 'static,
    AR: ActionLogRepository + Send + Sync + 'static,
    CP: CommandPublisher + Send + Sync + 'static,
{
    let summary = state.stats_service.summary().await?;

    Ok(Json(StatsResponse {
        total_readings: summary.total_readings,
        total_actions: summary.total_actions,
        energy_saving_percent: summary.energy_saving_percent,
        recent: summary.recent,
    }))
}
