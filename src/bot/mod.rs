//! Discord bot integration.
//!
//! The bot is the only surface of the application: slash commands drive all
//! configuration, the member-join event delivers welcome messages, and the
//! ready event registers commands and starts the job scheduler.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - guild lifecycle events
//! - `GUILD_MEMBERS` - member joins for welcome messages (privileged intent,
//!   must be enabled in the Discord Developer Portal)
//! - `GUILD_MESSAGES` - message events
//! - `GUILD_VOICE_STATES` - voice state tracking for the music wrapper

pub mod handler;
pub mod start;
