//! # luxhub-domain
//!
//! Pure domain model for the luxhub smart-home telemetry system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error taxonomy, timestamps
//! - Define **Rooms** (fixed logical zones) and the closed **`RoomRegistry`**
//! - Define **Readings** (merged motion+lux snapshots per room)
//! - Define **Action logs** (ON/OFF audit records with provenance)
//! - Contain all invariant enforcement and merge logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod action_log;
pub mod reading;
pub mod room;
