//! # luxhub-app
//!
//! Application layer for luxhub — use-cases and port definitions.
//!
//! ## Responsibilities
//! - Define **ports** (traits) for storage and outbound command publishing
//! - **Reading reconciliation**: merge partial motion/lux events into
//!   complete readings, serialized per room
//! - **Action recording**: normalize and append light audit records
//! - **Event routing**: parse bus topics, gate on the room registry, and
//!   dispatch to the reconciler or recorder
//! - **Query/control façade**: aggregate statistics and outbound light
//!   commands
//!
//! ## Dependency rule
//! Depends only on `luxhub-domain`. Knows nothing about MQTT, HTTP, or
//! SQL — those live behind the port traits.

pub mod event_router;
pub mod ports;
pub mod services;
