//! Inbound message pump — subscribes to room topics and feeds every
//! publish through the event router.

use std::sync::Arc;
use std::time::Duration;

use rumqttc::{AsyncClient, Event, EventLoop, Incoming, QoS};
use tokio::sync::Semaphore;

use luxhub_app::event_router::EventRouter;
use luxhub_app::ports::{ActionLogRepository, ReadingRepository};

use crate::config::MqttConfig;

/// Delay before polling again after a connection error.
const RECONNECT_BACKOFF: Duration = Duration::from_secs(1);

/// Drives the rumqttc event loop and dispatches inbound publishes.
///
/// Each publish is handled in its own task so a slow store write never
/// blocks the loop; a semaphore bounds the number of in-flight handlers
/// so a burst cannot leak unbounded concurrency. The loop itself survives
/// connection errors indefinitely — rumqttc reconnects on the next poll.
pub struct MqttIngestor<RR, AR> {
    client: AsyncClient,
    event_loop: EventLoop,
    router: Arc<EventRouter<RR, AR>>,
    config: MqttConfig,
    permits: Arc<Semaphore>,
}

impl<RR, AR> MqttIngestor<RR, AR>
where
    RR: ReadingRepository + Send + Sync + 'static,
    AR: ActionLogRepository + Send + Sync + 'static,
{
    /// Create an ingestor over the shared client handle and its event loop.
    #[must_use]
    pub fn new(
        client: AsyncClient,
        event_loop: EventLoop,
        router: Arc<EventRouter<RR, AR>>,
        config: MqttConfig,
    ) -> Self {
        let permits = Arc::new(Semaphore::new(config.max_in_flight_messages));
        Self {
            client,
            event_loop,
            router,
            config,
            permits,
        }
    }

    /// Run the ingest loop forever.
    ///
    /// Subscriptions are (re-)established on every `ConnAck` so they
    /// survive broker reconnects.
    pub async fn run(mut self) {
        loop {
            match self.event_loop.poll().await {
                Ok(Event::Incoming(Incoming::ConnAck(_))) => {
                    tracing::info!(
                        host = %self.config.broker_host,
                        port = self.config.broker_port,
                        "connected to MQTT broker"
                    );
                    self.subscribe().await;
                }
                Ok(Event::Incoming(Incoming::Publish(publish))) => {
                    let topic = publish.topic.clone();
                    let payload = String::from_utf8_lossy(&publish.payload).into_owned();
                    self.dispatch(topic, payload).await;
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(error = %err, "MQTT connection error, retrying");
                    tokio::time::sleep(RECONNECT_BACKOFF).await;
                }
            }
        }
    }

    async fn subscribe(&mut self) {
        for filter in self.config.subscription_filters() {
            if let Err(err) = self.client.subscribe(&filter, QoS::AtMostOnce).await {
                tracing::error!(filter, error = %err, "MQTT subscribe failed");
            } else {
                tracing::debug!(filter, "subscribed");
            }
        }
    }

    /// Hand one message to the router on its own task, bounded by the
    /// in-flight semaphore.
    async fn dispatch(&mut self, topic: String, payload: String) {
        let Ok(permit) = Arc::clone(&self.permits).acquire_owned().await else {
            // The semaphore is never closed; this arm is unreachable.
            return;
        };
        let router = Arc::clone(&self.router);
        tokio::spawn(async move {
            router.handle(&topic, &payload).await;
            drop(permit);
        });
    }
}
