//! `SQLite` implementation of [`ActionLogRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use luxhub_app::ports::storage::ActionLogRepository;
use luxhub_domain::action_log::{ActionLog, ActionReason, LightAction};
use luxhub_domain::error::LuxError;
use luxhub_domain::id::ActionLogId;
use luxhub_domain::room::Room;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without
/// polluting domain structs with database concerns.
struct Wrapper(ActionLog);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: uuid::Uuid = row.try_get("id")?;
        let room: String = row.try_get("room")?;
        let action_str: String = row.try_get("action")?;
        let reason_str: String = row.try_get("reason")?;
        let recorded_at_str: String = row.try_get("recorded_at")?;

        let action: LightAction = action_str
            .parse()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let reason: ActionReason = reason_str
            .parse()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let recorded_at = chrono::DateTime::parse_from_rfc3339(&recorded_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(
            ActionLog::builder(Room::new(room), action, reason)
                .id(ActionLogId::from_uuid(id))
                .recorded_at(recorded_at)
                .build(),
        ))
    }
}

const INSERT: &str = r"
    INSERT INTO action_logs (id, room, action, reason, recorded_at)
    VALUES (?, ?, ?, ?, ?)
";

const SELECT_RECENT: &str = r"
    SELECT * FROM action_logs
    ORDER BY recorded_at DESC, seq DESC
    LIMIT ?
";

const COUNT: &str = "SELECT COUNT(*) FROM action_logs";

const COUNT_BY_ACTION: &str = "SELECT COUNT(*) FROM action_logs WHERE action = ?";

/// `SQLite`-backed action log repository.
pub struct SqliteActionLogRepository {
    pool: SqlitePool,
}

impl SqliteActionLogRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ActionLogRepository for SqliteActionLogRepository {
    async fn append(&self, log: ActionLog) -> Result<ActionLog, LuxError> {
        sqlx::query(INSERT)
            .bind(log.id.as_uuid())
            .bind(log.room.as_str())
            .bind(log.action.as_str())
            .bind(log.reason.as_str())
            .bind(log.recorded_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(log)
    }

    async fn count(&self) -> Result<u64, LuxError> {
        let (count,): (i64,) = sqlx::query_as(COUNT)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(count.unsigned_abs())
    }

    async fn count_by_action(&self, action: LightAction) -> Result<u64, LuxError> {
        let (count,): (i64,) = sqlx::query_as(COUNT_BY_ACTION)
            .bind(action.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(count.unsigned_abs())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<ActionLog>, LuxError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_RECENT)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|wrapper| wrapper.0).collect())
    }
}
