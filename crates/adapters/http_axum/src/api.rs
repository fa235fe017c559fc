//! JSON API handlers.

pub mod light;
pub mod stats;
