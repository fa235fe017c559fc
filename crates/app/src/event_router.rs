//! Event router — parses inbound bus topics and dispatches to the
//! reading reconciler or the action recorder.
//!
//! The router is designed to keep consuming messages across arbitrarily
//! many malformed events: every failure is logged and contained, never
//! propagated to the ingest loop.

use luxhub_domain::action_log::ActionReason;
use luxhub_domain::reading::SensorSample;
use luxhub_domain::room::{Room, RoomRegistry};

use crate::ports::{ActionLogRepository, ReadingRepository};
use crate::services::action_service::ActionService;
use crate::services::reading_service::ReadingService;

/// A routing decision for one inbound message.
#[derive(Debug)]
enum Dispatch {
    /// A motion or lux sample for the reconciler.
    Sensor { room: Room, sample: SensorSample },
    /// A light command/state for the recorder.
    Action {
        room: Room,
        raw_action: String,
        reason: ActionReason,
    },
}

/// Routes raw `(topic, payload)` pairs into the application services.
pub struct EventRouter<RR, AR> {
    registry: RoomRegistry,
    readings: ReadingService<RR>,
    actions: ActionService<AR>,
}

impl<RR, AR> EventRouter<RR, AR>
where
    RR: ReadingRepository,
    AR: ActionLogRepository,
{
    /// Create a router over the given registry and services.
    pub fn new(
        registry: RoomRegistry,
        readings: ReadingService<RR>,
        actions: ActionService<AR>,
    ) -> Self {
        Self {
            registry,
            readings,
            actions,
        }
    }

    /// Handle one inbound message end-to-end.
    ///
    /// Undeliverable messages are dropped (unregistered rooms and bad lux
    /// payloads with a warning); downstream failures are logged at error
    /// level.
    /// This method never fails from the caller's point of view.
    pub async fn handle(&self, topic: &str, payload: &str) {
        let Some(dispatch) = self.route(topic, payload) else {
            return;
        };

        let result = match dispatch {
            Dispatch::Sensor { room, sample } => self
                .readings
                .reconcile(&room, sample)
                .await
                .map(|reading| {
                    tracing::debug!(
                        room = %reading.room,
                        motion = reading.motion,
                        lux = reading.lux,
                        "reading stored"
                    );
                })
                .map_err(|err| (room, err)),
            Dispatch::Action {
                room,
                raw_action,
                reason,
            } => self
                .actions
                .record(room.clone(), &raw_action, reason)
                .await
                .map(|log| {
                    tracing::debug!(
                        room = %log.room,
                        action = %log.action,
                        reason = %log.reason,
                        "action logged"
                    );
                })
                .map_err(|err| (room, err)),
        };

        if let Err((room, err)) = result {
            tracing::error!(topic, %room, error = %err, "failed to handle bus event");
        }
    }

    /// Parse a topic/payload pair into a dispatch decision.
    ///
    /// Topic shape: `<root>/<room>/<leaf>[/<sub>]`. A missing room drops
    /// silently; an unregistered room drops with a warning; any other
    /// unrecognized shape drops silently.
    fn route(&self, topic: &str, payload: &str) -> Option<Dispatch> {
        let mut segments = topic.split('/');
        let _root = segments.next()?;
        let room = segments.next().filter(|segment| !segment.is_empty())?;

        if !self.registry.contains(room) {
            tracing::warn!(room, "ignoring event for unknown room");
            return None;
        }
        let room = Room::new(room);

        let leaf = segments.next()?;
        let sub = segments.next();
        if segments.next().is_some() {
            return None;
        }

        match (leaf, sub) {
            ("motion", None) => Some(Dispatch::Sensor {
                room,
                sample: SensorSample::Motion(payload == "1"),
            }),
            ("lux", None) => match payload.trim().parse::<f64>() {
                Ok(lux) if lux.is_finite() => Some(Dispatch::Sensor {
                    room,
                    sample: SensorSample::Lux(lux),
                }),
                _ => {
                    tracing::warn!(topic, payload, "dropping non-numeric lux payload");
                    None
                }
            },
            ("light", Some("cmd")) => Some(Dispatch::Action {
                room,
                raw_action: payload.to_string(),
                reason: ActionReason::Cmd,
            }),
            ("light", Some("state")) => Some(Dispatch::Action {
                room,
                raw_action: payload.to_string(),
                reason: ActionReason::State,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use luxhub_domain::action_log::{ActionLog, LightAction};
    use luxhub_domain::error::LuxError;
    use luxhub_domain::reading::Reading;

    /// Cloneable in-memory repository; tests keep a handle to inspect
    /// what the router stored.
    #[derive(Default, Clone)]
    struct InMemoryReadingRepo {
        store: Arc<Mutex<Vec<Reading>>>,
    }

    impl ReadingRepository for InMemoryReadingRepo {
        async fn append(&self, reading: Reading) -> Result<Reading, LuxError> {
            self.store.lock().unwrap().push(reading.clone());
            Ok(reading)
        }

        async fn latest_for_room(&self, room: &Room) -> Result<Option<Reading>, LuxError> {
            Ok(self
                .store
                .lock()
                .unwrap()
                .iter()
                .rev()
                .find(|reading| &reading.room == room)
                .cloned())
        }

        async fn count(&self) -> Result<u64, LuxError> {
            Ok(self.store.lock().unwrap().len() as u64)
        }
    }

    #[derive(Default, Clone)]
    struct InMemoryActionLogRepo {
        store: Arc<Mutex<Vec<ActionLog>>>,
    }

    impl ActionLogRepository for InMemoryActionLogRepo {
        async fn append(&self, log: ActionLog) -> Result<ActionLog, LuxError> {
            self.store.lock().unwrap().push(log.clone());
            Ok(log)
        }

        async fn count(&self) -> Result<u64, LuxError> {
            Ok(self.store.lock().unwrap().len() as u64)
        }

        async fn count_by_action(&self, action: LightAction) -> Result<u64, LuxError> {
            Ok(self
                .store
                .lock()
                .unwrap()
                .iter()
                .filter(|log| log.action == action)
                .count() as u64)
        }

        async fn recent(&self, limit: usize) -> Result<Vec<ActionLog>, LuxError> {
            let store = self.store.lock().unwrap();
            Ok(store.iter().rev().take(limit).cloned().collect())
        }
    }

    struct Fixture {
        router: EventRouter<InMemoryReadingRepo, InMemoryActionLogRepo>,
        reading_store: InMemoryReadingRepo,
        action_store: InMemoryActionLogRepo,
    }

    impl Fixture {
        fn readings(&self) -> Vec<Reading> {
            self.reading_store.store.lock().unwrap().clone()
        }

        fn actions(&self) -> Vec<ActionLog> {
            self.action_store.store.lock().unwrap().clone()
        }
    }

    fn fixture() -> Fixture {
        let registry = RoomRegistry::default();
        let reading_store = InMemoryReadingRepo::default();
        let action_store = InMemoryActionLogRepo::default();
        let router = EventRouter::new(
            registry.clone(),
            ReadingService::new(reading_store.clone(), &registry),
            ActionService::new(action_store.clone()),
        );
        Fixture {
            router,
            reading_store,
            action_store,
        }
    }

    #[tokio::test]
    async fn should_store_reading_for_motion_event() {
        let fx = fixture();
        fx.router.handle("home/kitchen/motion", "1").await;

        let stored = fx.readings();
        assert_eq!(stored.len(), 1);
        assert!(stored[0].motion);
        assert!((stored[0].lux - 0.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_treat_any_payload_but_one_as_no_motion() {
        let fx = fixture();
        fx.router.handle("home/kitchen/motion", "0").await;
        fx.router.handle("home/kitchen/motion", "yes").await;

        let stored = fx.readings();
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|reading| !reading.motion));
    }

    #[tokio::test]
    async fn should_merge_lux_event_with_previous_motion() {
        let fx = fixture();
        fx.router.handle("home/bedroom/motion", "1").await;
        fx.router.handle("home/bedroom/lux", "250.5").await;

        let stored = fx.readings();
        assert_eq!(stored.len(), 2);
        assert!(stored[1].motion);
        assert!((stored[1].lux - 250.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_drop_event_for_unregistered_room() {
        let fx = fixture();
        fx.router.handle("home/garage/motion", "1").await;

        assert!(fx.readings().is_empty());
        assert!(fx.actions().is_empty());
    }

    #[tokio::test]
    async fn should_drop_topic_without_room_segment() {
        let fx = fixture();
        fx.router.handle("home", "1").await;
        fx.router.handle("home//motion", "1").await;

        assert!(fx.readings().is_empty());
    }

    #[tokio::test]
    async fn should_drop_non_numeric_lux_payload() {
        let fx = fixture();
        fx.router.handle("home/kitchen/lux", "bright").await;

        assert!(fx.readings().is_empty());
    }

    #[tokio::test]
    async fn should_drop_non_finite_lux_payload() {
        let fx = fixture();
        fx.router.handle("home/kitchen/lux", "NaN").await;
        fx.router.handle("home/kitchen/lux", "inf").await;

        assert!(fx.readings().is_empty());
    }

    #[tokio::test]
    async fn should_record_command_with_cmd_reason() {
        let fx = fixture();
        fx.router.handle("home/kitchen/light/cmd", "on").await;

        let stored = fx.actions();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].action, LightAction::On);
        assert_eq!(stored[0].reason, ActionReason::Cmd);
    }

    #[tokio::test]
    async fn should_record_state_with_state_reason() {
        let fx = fixture();
        fx.router.handle("home/livingarea/light/state", "oFf").await;

        let stored = fx.actions();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].action, LightAction::Off);
        assert_eq!(stored[0].reason, ActionReason::State);
    }

    #[tokio::test]
    async fn should_drop_unrecognized_leaf_silently() {
        let fx = fixture();
        fx.router.handle("home/kitchen/temperature", "21.5").await;
        fx.router.handle("home/kitchen/light/brightness", "80").await;
        fx.router.handle("home/kitchen/light/cmd/extra", "ON").await;

        assert!(fx.readings().is_empty());
        assert!(fx.actions().is_empty());
    }

    #[tokio::test]
    async fn should_survive_a_burst_of_malformed_events() {
        let fx = fixture();
        for _ in 0..50 {
            fx.router.handle("", "").await;
            fx.router.handle("home/nowhere/motion", "1").await;
            fx.router.handle("home/kitchen/lux", "not-a-number").await;
        }
        fx.router.handle("home/kitchen/motion", "1").await;

        assert_eq!(fx.readings().len(), 1);
    }
}
