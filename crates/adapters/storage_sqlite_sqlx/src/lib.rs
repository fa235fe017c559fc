//! # luxhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `luxhub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `luxhub-app` (for port traits) and `luxhub-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

pub mod action_log_repo;
pub mod error;
pub mod pool;
pub mod reading_repo;

pub use action_log_repo::SqliteActionLogRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use reading_repo::SqliteReadingRepository;
