//! # luxhubd — luxhub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Connect to the MQTT broker and spawn the ingest loop
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use luxhub_adapter_http_axum::state::AppState;
use luxhub_adapter_mqtt::{MqttCommandPublisher, MqttIngestor};
use luxhub_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, SqliteActionLogRepository, SqliteReadingRepository,
};
use luxhub_app::event_router::EventRouter;
use luxhub_app::services::action_service::ActionService;
use luxhub_app::services::light_service::LightService;
use luxhub_app::services::reading_service::ReadingService;
use luxhub_app::services::stats_service::StatsService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = StorageConfig {
        database_url: config.database.url.clone(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    let registry = config.registry();

    // Bus client: one handle shared by the publisher and the ingest loop.
    let (client, event_loop) = luxhub_adapter_mqtt::connect(&config.mqtt);

    // Ingest side: router over its own repository instances.
    let router = Arc::new(EventRouter::new(
        registry.clone(),
        ReadingService::new(SqliteReadingRepository::new(pool.clone()), &registry),
        ActionService::new(SqliteActionLogRepository::new(pool.clone())),
    ));
    let ingestor = MqttIngestor::new(client.clone(), event_loop, router, config.mqtt.clone());
    tokio::spawn(ingestor.run());

    // HTTP side
    let stats_service = StatsService::new(
        SqliteReadingRepository::new(pool.clone()),
        SqliteActionLogRepository::new(pool),
    );
    let light_service = LightService::new(
        MqttCommandPublisher::new(client, &config.mqtt),
        registry,
    );
    let app = luxhub_adapter_http_axum::router::build(AppState::new(stats_service, light_service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "luxhubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown handler");
        return;
    }
    tracing::info!("shutdown signal received");
}
