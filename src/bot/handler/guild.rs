//! Guild event handlers.
//!
//! Guild instances are created lazily on first command use, never here; the
//! guild_create event only refreshes the stored display name of guilds the
//! bot already knows.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild};

use crate::data::guild::GuildRepository;

pub async fn handle_guild_create(
    db: &DatabaseConnection,
    _ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    let repo = GuildRepository::new(db);

    if let Err(e) = repo.update_name(guild.id.get() as i64, &guild.name).await {
        tracing::error!("Failed to refresh name of guild {}: {:?}", guild.id, e);
    }
}
