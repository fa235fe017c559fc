//! MQTT adapter configuration.

use std::time::Duration;

use rumqttc::MqttOptions;
use serde::Deserialize;

/// Configuration for the MQTT adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MqttConfig {
    /// MQTT broker hostname or IP address.
    pub broker_host: String,
    /// MQTT broker port.
    pub broker_port: u16,
    /// MQTT client identifier.
    pub client_id: String,
    /// Root segment of all luxhub topics (`<base>/<room>/<leaf>`).
    pub base_topic: String,
    /// Keep-alive interval in seconds.
    pub keep_alive_secs: u16,
    /// Request channel capacity for the rumqttc client.
    pub channel_capacity: usize,
    /// Upper bound on concurrently handled inbound messages.
    pub max_in_flight_messages: usize,
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self {
            broker_host: "localhost".to_string(),
            broker_port: 1883,
            client_id: "luxhub".to_string(),
            base_topic: "home".to_string(),
            keep_alive_secs: 30,
            channel_capacity: 64,
            max_in_flight_messages: 64,
        }
    }
}

impl MqttConfig {
    /// Build rumqttc connection options from this configuration.
    #[must_use]
    pub fn options(&self) -> MqttOptions {
        let mut options = MqttOptions::new(
            self.client_id.clone(),
            self.broker_host.clone(),
            self.broker_port,
        );
        options.set_keep_alive(Duration::from_secs(u64::from(self.keep_alive_secs)));
        options
    }

    /// The subscription filters covering every room's sensor and light
    /// topics.
    #[must_use]
    pub fn subscription_filters(&self) -> [String; 4] {
        [
            format!("{}/+/motion", self.base_topic),
            format!("{}/+/lux", self.base_topic),
            format!("{}/+/light/cmd", self.base_topic),
            format!("{}/+/light/state", self.base_topic),
        ]
    }

    /// The outbound command topic for a room.
    #[must_use]
    pub fn command_topic(&self, room: &str) -> String {
        format!("{}/{room}/light/cmd", self.base_topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = MqttConfig::default();
        assert_eq!(config.broker_host, "localhost");
        assert_eq!(config.broker_port, 1883);
        assert_eq!(config.client_id, "luxhub");
        assert_eq!(config.base_topic, "home");
        assert_eq!(config.keep_alive_secs, 30);
        assert_eq!(config.max_in_flight_messages, 64);
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            broker_host = "mqtt.example.com"
            broker_port = 8883
            client_id = "my-hub"
            base_topic = "house"
            keep_alive_secs = 60
            max_in_flight_messages = 16
        "#;
        let config: MqttConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.broker_host, "mqtt.example.com");
        assert_eq!(config.broker_port, 8883);
        assert_eq!(config.client_id, "my-hub");
        assert_eq!(config.base_topic, "house");
        assert_eq!(config.keep_alive_secs, 60);
        assert_eq!(config.max_in_flight_messages, 16);
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let toml = r#"broker_host = "192.168.1.100""#;
        let config: MqttConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.broker_host, "192.168.1.100");
        assert_eq!(config.broker_port, 1883);
        assert_eq!(config.client_id, "luxhub");
    }

    #[test]
    fn should_build_wildcard_subscription_filters() {
        let config = MqttConfig::default();
        let filters = config.subscription_filters();
        assert!(filters.contains(&"home/+/motion".to_string()));
        assert!(filters.contains(&"home/+/lux".to_string()));
        assert!(filters.contains(&"home/+/light/cmd".to_string()));
        assert!(filters.contains(&"home/+/light/state".to_string()));
    }

    #[test]
    fn should_format_command_topic_for_room() {
        let config = MqttConfig::default();
        assert_eq!(config.command_topic("kitchen"), "home/kitchen/light/cmd");
    }
}
