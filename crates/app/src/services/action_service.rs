//! Action service — records light commands and states as audit entries.

use luxhub_domain::action_log::{ActionLog, ActionReason, LightAction};
use luxhub_domain::error::LuxError;
use luxhub_domain::room::Room;

use crate::ports::ActionLogRepository;

/// Application service for appending [`ActionLog`] entries.
///
/// Unlike readings, each light event is a complete independent record,
/// so there is no merge step and no per-room serialization.
pub struct ActionService<R> {
    repo: R,
}

impl<R: ActionLogRepository> ActionService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Normalize `raw_action` and append an audit entry tagged with its
    /// provenance.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn record(
        &self,
        room: Room,
        raw_action: &str,
        reason: ActionReason,
    ) -> Result<ActionLog, LuxError> {
        let action = LightAction::normalize(raw_action);
        self.repo.append(ActionLog::new(room, action, reason)).await
    }
}
