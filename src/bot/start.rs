use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use songbird::SerenityInit;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::music::HttpKey;
use crate::scheduler::registry::JobRegistry;

/// Builds the Discord client with the event handler, the voice manager and
/// the shared HTTP client the audio extractor uses.
///
/// GUILD_MEMBERS is a privileged intent and must be enabled in the Discord
/// Developer Portal for the bot application.
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    registry: Arc<JobRegistry>,
) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_VOICE_STATES;

    let handler = Handler::new(db, registry);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .register_songbird()
        .type_map_insert::<HttpKey>(reqwest::Client::new())
        .await?;

    Ok(client)
}
