//! Slash command definitions and dispatch.
//!
//! Each submodule owns one top-level command: its `register()` builds the
//! `CreateCommand` sent to Discord, its `handle()` executes an invocation
//! and returns the reply text. Dispatch turns `BadRequest`/`NotFound` errors
//! into user-visible replies and logs everything else behind a generic
//! failure message.

pub mod apply;
pub mod form;
pub mod helper;
pub mod music;
pub mod raidplan;
pub mod review;
pub mod schedule;
pub mod welcome;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Command, CommandInteraction, Context};

use crate::error::AppError;
use crate::scheduler::registry::JobRegistry;

/// Registers all slash commands globally.
pub async fn register_commands(ctx: &Context) -> Result<(), AppError> {
    Command::set_global_commands(
        &ctx.http,
        vec![
            schedule::register(),
            raidplan::register(),
            welcome::register(),
            form::register(),
            apply::register(),
            review::register(),
            music::register(),
        ],
    )
    .await?;

    tracing::info!("Registered global slash commands");

    Ok(())
}

/// Routes a command interaction to its handler and replies with the outcome.
pub async fn dispatch(
    ctx: &Context,
    cmd: &CommandInteraction,
    db: &DatabaseConnection,
    registry: &Arc<JobRegistry>,
) {
    let result = match cmd.data.name.as_str() {
        "schedule" => schedule::handle(ctx, cmd, db, registry).await,
        "raidplan" => raidplan::handle(ctx, cmd, db, registry).await,
        "welcome" => welcome::handle(ctx, cmd, db).await,
        "form" => form::handle(ctx, cmd, db).await,
        "apply" => apply::handle(ctx, cmd, db).await,
        "review" => review::handle(ctx, cmd, db).await,
        "music" => music::handle(ctx, cmd).await,
        other => Err(AppError::BadRequest(format!("Unknown command '{}'.", other))),
    };

    match result {
        Ok(reply) => helper::respond(ctx, cmd, &reply).await,
        Err(AppError::BadRequest(message)) | Err(AppError::NotFound(message)) => {
            helper::respond(ctx, cmd, &message).await;
        }
        Err(e) => {
            tracing::error!("Command '{}' failed: {}", cmd.data.name, e);
            helper::respond(ctx, cmd, "Something went wrong while handling the command.").await;
        }
    }
}
