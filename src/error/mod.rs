//! Application error types.
//!
//! `AppError` is the top-level error type aggregating everything that can go
//! wrong in the bot: configuration loading, database operations, Discord API
//! calls, scheduler operations, and voice connections. Most variants use
//! `#[from]` for automatic conversion with `?`.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Voice channel join/leave error from songbird.
    #[error(transparent)]
    VoiceErr(#[from] songbird::error::JoinError),

    /// Resource not found; the message is shown to the invoking user.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request; the message is shown to the invoking user.
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with a message for server-side logging only.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to keep the AppError enum small, as serenity::Error is
/// very large.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
