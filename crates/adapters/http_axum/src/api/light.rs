//! `POST /api/light/{room}` handler.

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use luxhub_app::ports::{ActionLogRepository, CommandPublisher, ReadingRepository};
use luxhub_domain::action_log::LightAction;
use luxhub_domain::room::Room;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for a manual light command.
#[derive(Deserialize)]
pub struct SetLightRequest {
    /// Desired light state; must be ON or OFF in any casing.
    action: Option<String>,
}

/// Acknowledgement for an accepted light command.
#[derive(Serialize)]
pub struct SetLightResponse {
    /// The canonical registered room name.
    room: Room,
    /// The normalized, uppercase action.
    action: LightAction,
    published: bool,
}

/// Validates the room and action, publishes the command, and returns an
/// acknowledgement. The acknowledgement means the publish was accepted by
/// the bus client, not that the light changed state.
pub async fn set_light<RR, AR, CP>(
    State(state): State<AppState<RR, AR, CP>>,
    Path(room): Path<String>,
    Json(request): Json<SetLightRequest>,
) -> Result<Json<SetLightResponse>, ApiError>
where
    RR: ReadingRepository + Send + Sync + 'static,
    AR: ActionLogRepository + Send + Sync + 'static,
    CP: CommandPublisher + Send + Sync + 'static,
{
    let action = request.action.as_deref().unwrap_or_default();
    let command = state.light_service.set_light(&room, action).await?;

    Ok(Json(SetLightResponse {
        room: command.room,
        action: command.action,
        published: true,
    }))
}
