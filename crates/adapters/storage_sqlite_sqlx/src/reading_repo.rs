//! `SQLite` implementation of [`ReadingRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use luxhub_app::ports::storage::ReadingRepository;
use luxhub_domain::error::LuxError;
use luxhub_domain::id::ReadingId;
use luxhub_domain::reading::Reading;
use luxhub_domain::room::Room;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without
/// polluting domain structs with database concerns.
struct Wrapper(Reading);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: uuid::Uuid = row.try_get("id")?;
        let room: String = row.try_get("room")?;
        let motion: bool = row.try_get("motion")?;
        let lux: f64 = row.try_get("lux")?;
        let recorded_at_str: String = row.try_get("recorded_at")?;

        let recorded_at = chrono::DateTime::parse_from_rfc3339(&recorded_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(
            Reading::builder(Room::new(room))
                .id(ReadingId::from_uuid(id))
                .motion(motion)
                .lux(lux)
                .recorded_at(recorded_at)
                .build(),
        ))
    }
}

const INSERT: &str = r"
    INSERT INTO readings (id, room, motion, lux, recorded_at)
    VALUES (?, ?, ?, ?, ?)
";

const SELECT_LATEST_FOR_ROOM: &str = r"
    SELECT * FROM readings
    WHERE room = ?
    ORDER BY recorded_at DESC, seq DESC
    LIMIT 1
";

const COUNT: &str = "SELECT COUNT(*) FROM readings";

/// `SQLite`-backed reading repository.
pub struct SqliteReadingRepository {
    pool: SqlitePool,
}

impl SqliteReadingRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReadingRepository for SqliteReadingRepository {
    async fn append(&self, reading: Reading) -> Result<Reading, LuxError> {
        sqlx::query(INSERT)
            .bind(reading.id.as_uuid())
            .bind(reading.room.as_str())
            .bind(reading.motion)
            .bind(reading.lux)
            .bind(reading.recorded_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(reading)
    }

    async fn latest_for_room(&self, room: &Room) -> Result<Option<Reading>, LuxError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_LATEST_FOR_ROOM)
            .bind(room.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|wrapper| wrapper.0))
    }

    async fn count(&self) -> Result<u64, LuxError> {
        let (count,): (i64,) = sqlx::query_as(COUNT)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(count.unsigned_abs())
    }
}
