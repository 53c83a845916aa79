//! Ready event handler for bot initialization.
//!
//! The ready event fires once the gateway handshake completes. This is where
//! the global slash commands are registered and the job scheduler performs
//! its initial load, since job executors need a live connection to act on.

use std::sync::Arc;

use serenity::all::{ActivityData, Context, Ready};

use crate::scheduler::registry::JobRegistry;

pub async fn handle_ready(ctx: Context, ready: Ready, registry: Arc<JobRegistry>) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("over the guild")));

    if let Err(e) = crate::command::register_commands(&ctx).await {
        tracing::error!("Failed to register slash commands: {}", e);
    }

    tokio::spawn(async move {
        if let Err(e) = registry.ensure_started().await {
            tracing::error!("Job scheduler initialization failed: {}", e);
        }
    });
}
