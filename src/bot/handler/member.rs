//! Member event handlers: welcome message delivery.
//!
//! When a member joins a guild with an enabled welcome message, the rendered
//! template is posted to the guild's system channel. Every failure here is
//! log-and-continue; a broken welcome setup must never affect other events.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, CreateMessage, Member, Mentionable};

use crate::data::{guild::GuildRepository, welcome::WelcomeRepository};
use crate::service::welcome;

pub async fn handle_guild_member_addition(db: &DatabaseConnection, ctx: Context, new_member: Member) {
    let guild_id = new_member.guild_id;

    let instance = match GuildRepository::new(db).find_by_guild_id(guild_id.get() as i64).await {
        Ok(Some(instance)) => instance,
        Ok(None) => return,
        Err(e) => {
            tracing::error!("Failed to query guild instance for {}: {:?}", guild_id, e);
            return;
        }
    };

    let message = match WelcomeRepository::new(db).get_by_guild(instance.id).await {
        Ok(Some(message)) if message.enabled => message,
        Ok(_) => return,
        Err(e) => {
            tracing::error!("Failed to query welcome message for {}: {:?}", guild_id, e);
            return;
        }
    };

    let guild = match ctx.http.get_guild(guild_id).await {
        Ok(guild) => guild,
        Err(e) => {
            tracing::error!("Failed to fetch guild {} for welcome message: {}", guild_id, e);
            return;
        }
    };

    let Some(channel_id) = guild.system_channel_id else {
        tracing::debug!("Guild {} has no system channel, skipping welcome message", guild_id);
        return;
    };

    let content = welcome::render(
        &message.template,
        &new_member.mention().to_string(),
        &new_member.user.name,
        &guild.name,
    );

    if let Err(e) = channel_id
        .send_message(&ctx.http, CreateMessage::new().content(content))
        .await
    {
        tracing::error!("Failed to send welcome message in guild {}: {}", guild_id, e);
    }
}
