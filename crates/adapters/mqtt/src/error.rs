//! MQTT adapter error types.

use luxhub_domain::error::LuxError;

/// Errors specific to the MQTT adapter.
#[derive(Debug, thiserror::Error)]
pub enum MqttError {
    /// The rumqttc client rejected a request (publish/subscribe).
    #[error("MQTT client error")]
    Client(#[source] rumqttc::ClientError),

    /// The broker connection failed.
    #[error("MQTT connection error")]
    Connection(#[source] rumqttc::ConnectionError),
}

impl From<MqttError> for LuxError {
    fn from(err: MqttError) -> Self {
        Self::Bus(Box::new(err))
    }
}
