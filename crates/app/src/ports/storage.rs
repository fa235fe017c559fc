//! Storage ports — append-only repositories for readings and action logs.

use std::future::Future;

use luxhub_domain::action_log::{ActionLog, LightAction};
use luxhub_domain::error::LuxError;
use luxhub_domain::reading::Reading;
use luxhub_domain::room::Room;

/// Repository for persisting and querying [`Reading`]s.
///
/// Readings are append-only: there is no update or delete.
pub trait ReadingRepository {
    /// Append a new reading.
    fn append(&self, reading: Reading) -> impl Future<Output = Result<Reading, LuxError>> + Send;

    /// The most recently recorded reading for a room, with a monotonic
    /// storage sequence as deterministic tiebreak on equal timestamps.
    fn latest_for_room(
        &self,
        room: &Room,
    ) -> impl Future<Output = Result<Option<Reading>, LuxError>> + Send;

    /// Total number of stored readings.
    fn count(&self) -> impl Future<Output = Result<u64, LuxError>> + Send;
}

/// Repository for persisting and querying [`ActionLog`]s.
///
/// Action logs are append-only: there is no update or delete.
pub trait ActionLogRepository {
    /// Append a new action log entry.
    fn append(&self, log: ActionLog) -> impl Future<Output = Result<ActionLog, LuxError>> + Send;

    /// Total number of stored action logs.
    fn count(&self) -> impl Future<Output = Result<u64, LuxError>> + Send;

    /// Number of stored action logs with the given action.
    fn count_by_action(
        &self,
        action: LightAction,
    ) -> impl Future<Output = Result<u64, LuxError>> + Send;

    /// The most recent action logs, newest-first, deterministic on ties.
    fn recent(&self, limit: usize)
    -> impl Future<Output = Result<Vec<ActionLog>, LuxError>> + Send;
}
