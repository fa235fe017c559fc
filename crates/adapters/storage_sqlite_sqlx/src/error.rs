//! Storage-specific error type wrapping sqlx errors.

use luxhub_domain::error::LuxError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// A stored value could not be decoded into its domain type.
    #[error("failed to decode stored value: {0}")]
    Decode(String),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for LuxError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
