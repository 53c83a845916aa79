//! Shared helpers for slash command handling: option extraction, guild
//! resolution and interaction replies.

use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, CommandInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage, ResolvedOption, ResolvedValue, UserId,
};

use crate::data::guild::GuildRepository;
use crate::error::AppError;

/// Splits a command's resolved options into subcommand name and arguments.
pub fn subcommand<'a>(
    options: &'a [ResolvedOption<'a>],
) -> Result<(&'a str, &'a [ResolvedOption<'a>]), AppError> {
    match options.first() {
        Some(ResolvedOption {
            name,
            value: ResolvedValue::SubCommand(args),
            ..
        }) => Ok((*name, args.as_slice())),
        _ => Err(AppError::BadRequest("Missing subcommand.".to_string())),
    }
}

pub fn get_str<'a>(args: &'a [ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    args.iter().find(|option| option.name == name).and_then(|option| match &option.value {
        ResolvedValue::String(value) => Some(*value),
        _ => None,
    })
}

pub fn get_i64(args: &[ResolvedOption<'_>], name: &str) -> Option<i64> {
    args.iter().find(|option| option.name == name).and_then(|option| match &option.value {
        ResolvedValue::Integer(value) => Some(*value),
        _ => None,
    })
}

pub fn get_channel(args: &[ResolvedOption<'_>], name: &str) -> Option<ChannelId> {
    args.iter().find(|option| option.name == name).and_then(|option| match &option.value {
        ResolvedValue::Channel(channel) => Some(channel.id),
        _ => None,
    })
}

pub fn get_user(args: &[ResolvedOption<'_>], name: &str) -> Option<UserId> {
    args.iter().find(|option| option.name == name).and_then(|option| match &option.value {
        ResolvedValue::User(user, _) => Some(user.id),
        _ => None,
    })
}

pub fn require_str<'a>(args: &'a [ResolvedOption<'a>], name: &str) -> Result<&'a str, AppError> {
    get_str(args, name)
        .ok_or_else(|| AppError::BadRequest(format!("Missing required option '{}'.", name)))
}

pub fn require_i64(args: &[ResolvedOption<'_>], name: &str) -> Result<i64, AppError> {
    get_i64(args, name)
        .ok_or_else(|| AppError::BadRequest(format!("Missing required option '{}'.", name)))
}

pub fn require_channel(args: &[ResolvedOption<'_>], name: &str) -> Result<ChannelId, AppError> {
    get_channel(args, name)
        .ok_or_else(|| AppError::BadRequest(format!("Missing required option '{}'.", name)))
}

pub fn require_user(args: &[ResolvedOption<'_>], name: &str) -> Result<UserId, AppError> {
    get_user(args, name)
        .ok_or_else(|| AppError::BadRequest(format!("Missing required option '{}'.", name)))
}

/// Resolves the guild instance a command was invoked in, creating the row
/// lazily on first use.
pub async fn resolve_guild(
    ctx: &Context,
    cmd: &CommandInteraction,
    db: &DatabaseConnection,
) -> Result<entity::guild_instance::Model, AppError> {
    let guild_id = cmd.guild_id.ok_or_else(|| {
        AppError::BadRequest("This command can only be used in a server.".to_string())
    })?;

    let cached_name = ctx.cache.guild(guild_id).map(|guild| guild.name.clone());
    let name = match cached_name {
        Some(name) => name,
        None => ctx.http.get_guild(guild_id).await?.name,
    };

    GuildRepository::new(db)
        .get_or_create(guild_id.get() as i64, &name)
        .await
        .map_err(AppError::from)
}

/// Sends an ephemeral reply to the interaction.
pub async fn respond(ctx: &Context, cmd: &CommandInteraction, content: &str) {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);

    if let Err(e) = cmd
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        tracing::error!("Failed to respond to interaction '{}': {}", cmd.data.name, e);
    }
}
