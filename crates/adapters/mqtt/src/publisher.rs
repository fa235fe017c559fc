//! Outbound command publisher — [`CommandPublisher`] over rumqttc.

use rumqttc::{AsyncClient, QoS};

use luxhub_app::ports::CommandPublisher;
use luxhub_domain::action_log::LightAction;
use luxhub_domain::error::LuxError;
use luxhub_domain::room::Room;

use crate::config::MqttConfig;
use crate::error::MqttError;

/// Publishes light commands on `<base>/<room>/light/cmd`.
///
/// Shares the [`AsyncClient`] handle with the ingestor; returns once the
/// client accepts the message, without waiting for device confirmation.
pub struct MqttCommandPublisher {
    client: AsyncClient,
    config: MqttConfig,
}

impl MqttCommandPublisher {
    /// Create a publisher over the shared client handle.
    #[must_use]
    pub fn new(client: AsyncClient, config: &MqttConfig) -> Self {
        Self {
            client,
            config: config.clone(),
        }
    }
}

impl CommandPublisher for MqttCommandPublisher {
    async fn publish_command(&self, room: &Room, action: LightAction) -> Result<(), LuxError> {
        let topic = self.config.command_topic(room.as_str());

        self.client
            .publish(
                topic.clone(),
                QoS::AtLeastOnce,
                false,
                action.as_str().as_bytes().to_vec(),
            )
            .await
            .map_err(MqttError::Client)?;

        tracing::debug!(topic, action = %action, "command published");
        Ok(())
    }
}
