mod bot;
mod command;
mod config;
mod data;
mod error;
mod model;
mod music;
mod scheduler;
mod service;
mod startup;

use std::sync::Arc;

use serenity::http::Http;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, scheduler::registry::JobRegistry};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    // The registry keeps its own HTTP client so executors can act without
    // holding a handle into the gateway client.
    let scheduler_http = Arc::new(Http::new(&config.discord_bot_token));
    let registry = Arc::new(JobRegistry::new(
        db.clone(),
        scheduler_http,
        config.scheduler_timezone,
    ));

    let mut client = bot::start::init_bot(&config, db, registry.clone()).await?;

    tracing::info!("Starting Discord bot");

    tokio::select! {
        result = client.start() => {
            if let Err(e) = result {
                tracing::error!("Discord bot error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutting down");
        }
    }

    registry.stop_all().await?;

    Ok(())
}
