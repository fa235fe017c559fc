//! Light service — validates and publishes outbound light commands.

use luxhub_domain::action_log::LightAction;
use luxhub_domain::error::LuxError;
use luxhub_domain::room::{Room, RoomRegistry};

use crate::ports::CommandPublisher;

/// The outcome of an accepted light command.
#[derive(Debug, Clone)]
pub struct LightCommand {
    /// The canonical registered room the command was published for.
    pub room: Room,
    /// The normalized action.
    pub action: LightAction,
}

/// Application service for manual light control.
///
/// Publishing does **not** write an action log: the command event flows
/// back through the event router, which is the single writer per event
/// source.
pub struct LightService<P> {
    publisher: P,
    registry: RoomRegistry,
}

impl<P: CommandPublisher> LightService<P> {
    /// Create a new service over the given publisher and room registry.
    pub fn new(publisher: P, registry: RoomRegistry) -> Self {
        Self {
            publisher,
            registry,
        }
    }

    /// Validate and publish a light command.
    ///
    /// Room resolution is case-insensitive; the published command carries
    /// the canonical registered room name and the uppercase action.
    /// Returns as soon as the publish is accepted by the bus client.
    ///
    /// # Errors
    ///
    /// [`LuxError::UnknownRoom`] for an unregistered room,
    /// [`LuxError::InvalidAction`] unless the action is case-insensitively
    /// ON or OFF, or an error from the publisher.
    pub async fn set_light(&self, room: &str, action: &str) -> Result<LightCommand, LuxError> {
        let room = self.registry.resolve(room)?.clone();
        let action = LightAction::parse_strict(action)?;

        self.publisher.publish_command(&room, action).await?;

        Ok(LightCommand { room, action })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Publisher stub that records what it was asked to publish.
    #[derive(Default)]
    struct RecordingPublisher {
        published: Mutex<Vec<(Room, LightAction)>>,
    }

    impl CommandPublisher for RecordingPublisher {
        async fn publish_command(&self, room: &Room, action: LightAction) -> Result<(), LuxError> {
            self.published.lock().unwrap().push((room.clone(), action));
            Ok(())
        }
    }

    fn service() -> LightService<RecordingPublisher> {
        LightService::new(RecordingPublisher::default(), RoomRegistry::default())
    }

    #[tokio::test]
    async fn should_publish_normalized_command_for_valid_request() {
        let service = service();

        let outcome = service.set_light("kitchen", "on").await.unwrap();

        assert_eq!(outcome.room.as_str(), "kitchen");
        assert_eq!(outcome.action, LightAction::On);

        let published = service.publisher.published.lock().unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].0.as_str(), "kitchen");
        assert_eq!(published[0].1, LightAction::On);
    }

    #[tokio::test]
    async fn should_resolve_room_case_insensitively() {
        let service = service();

        let outcome = service.set_light("KITCHEN", "OFF").await.unwrap();

        // The canonical registered name is published, not the raw input.
        assert_eq!(outcome.room.as_str(), "kitchen");
    }

    #[tokio::test]
    async fn should_reject_unknown_room_without_publishing() {
        let service = service();

        let result = service.set_light("attic", "on").await;

        assert!(matches!(result, Err(LuxError::UnknownRoom(_))));
        assert!(service.publisher.published.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_invalid_action_without_publishing() {
        let service = service();

        let result = service.set_light("kitchen", "dim").await;

        assert!(matches!(result, Err(LuxError::InvalidAction(_))));
        assert!(service.publisher.published.lock().unwrap().is_empty());
    }
}
