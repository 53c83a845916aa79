//! Interaction event handler: slash command dispatch.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Interaction};

use crate::scheduler::registry::JobRegistry;

pub async fn handle_interaction_create(
    db: &DatabaseConnection,
    registry: &Arc<JobRegistry>,
    ctx: Context,
    interaction: Interaction,
) {
    if let Interaction::Command(command) = interaction {
        crate::command::dispatch(&ctx, &command, db, registry).await;
    }
}
