//! `/music`: playback commands over the voice wrapper.

use serenity::all::{
    ChannelId, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    GuildId,
};

use crate::command::helper;
use crate::error::AppError;
use crate::music::player;

pub fn register() -> CreateCommand {
    CreateCommand::new("music")
        .description("Play music in a voice channel")
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "join",
            "Join your current voice channel",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "leave",
            "Leave the voice channel",
        ))
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "play", "Queue a track")
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::String, "url", "Track URL")
                        .required(true),
                ),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "skip",
            "Skip the current track",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "stop",
            "Stop playback and clear the queue",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "queue",
            "Show how many tracks are queued",
        ))
}

pub async fn handle(ctx: &Context, cmd: &CommandInteraction) -> Result<String, AppError> {
    let options = cmd.data.options();
    let (sub, args) = helper::subcommand(&options)?;

    let guild_id = cmd.guild_id.ok_or_else(|| {
        AppError::BadRequest("This command can only be used in a server.".to_string())
    })?;

    match sub {
        "join" => {
            let Some(channel_id) = caller_voice_channel(ctx, guild_id, cmd) else {
                return Err(AppError::BadRequest(
                    "Join a voice channel first.".to_string(),
                ));
            };

            player::join(ctx, guild_id, channel_id).await?;

            Ok("Joined your voice channel.".to_string())
        }
        "leave" => {
            player::leave(ctx, guild_id).await?;

            Ok("Left the voice channel.".to_string())
        }
        "play" => {
            let url = helper::require_str(args, "url")?;

            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AppError::BadRequest(
                    "The track must be given as an http(s) URL.".to_string(),
                ));
            }

            let queued = player::play(ctx, guild_id, url).await?;

            Ok(format!("Track queued (position {}).", queued))
        }
        "skip" => {
            player::skip(ctx, guild_id).await?;

            Ok("Skipped the current track.".to_string())
        }
        "stop" => {
            player::stop(ctx, guild_id).await?;

            Ok("Stopped playback and cleared the queue.".to_string())
        }
        "queue" => {
            let queued = player::queue_len(ctx, guild_id).await?;

            Ok(match queued {
                0 => "The queue is empty.".to_string(),
                1 => "1 track queued.".to_string(),
                n => format!("{} tracks queued.", n),
            })
        }
        other => Err(AppError::BadRequest(format!(
            "Unknown subcommand '{}'.",
            other
        ))),
    }
}

/// The voice channel the invoking user currently sits in, from the gateway
/// cache.
fn caller_voice_channel(
    ctx: &Context,
    guild_id: GuildId,
    cmd: &CommandInteraction,
) -> Option<ChannelId> {
    ctx.cache.guild(guild_id).and_then(|guild| {
        guild
            .voice_states
            .get(&cmd.user.id)
            .and_then(|voice_state| voice_state.channel_id)
    })
}
