//! # luxhub-adapter-mqtt
//!
//! MQTT adapter built on [rumqttc](https://docs.rs/rumqttc).
//!
//! ## Responsibilities
//! - Connect to the MQTT broker and subscribe to the room sensor and
//!   light topics
//! - Feed every inbound publish through the application's event router
//!   (driving adapter)
//! - Implement the [`CommandPublisher`](luxhub_app::ports::CommandPublisher)
//!   port for outbound light commands (driven adapter)
//!
//! ## Dependency rule
//! Depends on `luxhub-app` (for the router and port traits) and
//! `luxhub-domain`. Never leaks rumqttc types into the domain.

pub mod config;
pub mod error;
pub mod ingest;
pub mod publisher;

pub use config::MqttConfig;
pub use error::MqttError;
pub use ingest::MqttIngestor;
pub use publisher::MqttCommandPublisher;

use rumqttc::{AsyncClient, EventLoop};

/// Build the shared MQTT client and its event loop from configuration.
///
/// The same [`AsyncClient`] handle serves both subscribing (via the
/// [`MqttIngestor`]) and publishing (via the [`MqttCommandPublisher`]).
#[must_use]
pub fn connect(config: &MqttConfig) -> (AsyncClient, EventLoop) {
    AsyncClient::new(config.options(), config.channel_capacity)
}
