//! Application services — one per use-case.

pub mod action_service;
pub mod light_service;
pub mod reading_service;
pub mod stats_service;
