use std::sync::Arc;

use serenity::all::{ChannelId, Context, GuildId};
use serenity::async_trait;
use songbird::input::YoutubeDl;
use songbird::{Event, EventContext, EventHandler as VoiceEventHandler, Songbird, TrackEvent};

use crate::error::AppError;
use crate::music::HttpKey;

/// Relays track failures from the driver into the log. Playback continues
/// with the next queued track on its own.
struct TrackErrorNotifier;

#[async_trait]
impl VoiceEventHandler for TrackErrorNotifier {
    async fn act(&self, ctx: &EventContext<'_>) -> Option<Event> {
        if let EventContext::Track(track_list) = ctx {
            for (state, handle) in *track_list {
                tracing::warn!(
                    "Track {} entered error state: {:?}",
                    handle.uuid(),
                    state.playing
                );
            }
        }

        None
    }
}

async fn manager(ctx: &Context) -> Result<Arc<Songbird>, AppError> {
    songbird::get(ctx).await.ok_or_else(|| {
        AppError::InternalError("Songbird voice client was not registered at startup".to_string())
    })
}

/// Joins a voice channel and installs the track-error relay.
pub async fn join(ctx: &Context, guild_id: GuildId, channel_id: ChannelId) -> Result<(), AppError> {
    let manager = manager(ctx).await?;
    let call = manager.join(guild_id, channel_id).await?;

    let mut handler = call.lock().await;
    handler.remove_all_global_events();
    handler.add_global_event(TrackEvent::Error.into(), TrackErrorNotifier);

    Ok(())
}

/// Leaves the guild's voice channel, dropping the queue with it.
pub async fn leave(ctx: &Context, guild_id: GuildId) -> Result<(), AppError> {
    let manager = manager(ctx).await?;

    if manager.get(guild_id).is_none() {
        return Err(AppError::BadRequest(
            "The bot is not in a voice channel.".to_string(),
        ));
    }

    manager.remove(guild_id).await?;

    Ok(())
}

/// Enqueues a URL on the guild's builtin queue. The extractor resolves the
/// stream (including alternative URLs) lazily when the track starts.
///
/// Returns the queue length after enqueueing.
pub async fn play(ctx: &Context, guild_id: GuildId, url: &str) -> Result<usize, AppError> {
    let manager = manager(ctx).await?;

    let Some(call) = manager.get(guild_id) else {
        return Err(AppError::BadRequest(
            "The bot is not in a voice channel. Use /music join first.".to_string(),
        ));
    };

    let http_client = {
        let data = ctx.data.read().await;
        data.get::<HttpKey>().cloned().ok_or_else(|| {
            AppError::InternalError("HTTP client missing from context data".to_string())
        })?
    };

    let source = YoutubeDl::new(http_client, url.to_string());

    let mut handler = call.lock().await;
    handler.enqueue_input(source.into()).await;

    Ok(handler.queue().len())
}

/// Skips the currently playing track.
pub async fn skip(ctx: &Context, guild_id: GuildId) -> Result<(), AppError> {
    let manager = manager(ctx).await?;

    let Some(call) = manager.get(guild_id) else {
        return Err(AppError::BadRequest(
            "The bot is not in a voice channel.".to_string(),
        ));
    };

    let handler = call.lock().await;
    handler
        .queue()
        .skip()
        .map_err(|e| AppError::InternalError(format!("Failed to skip track: {}", e)))?;

    Ok(())
}

/// Stops playback and clears the queue.
pub async fn stop(ctx: &Context, guild_id: GuildId) -> Result<(), AppError> {
    let manager = manager(ctx).await?;

    let Some(call) = manager.get(guild_id) else {
        return Err(AppError::BadRequest(
            "The bot is not in a voice channel.".to_string(),
        ));
    };

    let handler = call.lock().await;
    handler.queue().stop();

    Ok(())
}

/// Number of tracks currently queued, including the playing one.
pub async fn queue_len(ctx: &Context, guild_id: GuildId) -> Result<usize, AppError> {
    let manager = manager(ctx).await?;

    let Some(call) = manager.get(guild_id) else {
        return Err(AppError::BadRequest(
            "The bot is not in a voice channel.".to_string(),
        ));
    };

    let handler = call.lock().await;

    Ok(handler.queue().len())
}
