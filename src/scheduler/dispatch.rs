//! Per-firing action dispatch and the two executors.

use std::sync::Arc;

use chrono::Utc;
use chrono_tz::Tz;
use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, ChannelType, CreateChannel, CreateMessage, GuildId};
use serenity::http::Http;

use crate::data::{guild::GuildRepository, raid_trigger::RaidTriggerRepository};
use crate::error::AppError;
use crate::model::job::ChannelNameOptions;
use crate::scheduler::format;

/// The side effect a fired job resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum JobAction {
    CreateChannel { category_id: i64 },
    PostRaid(entity::raid_trigger_event::Model),
    Skip,
}

/// Decides which action a fired job performs.
///
/// A category reference takes precedence unconditionally; a job cannot have
/// both behaviors. Without one, an associated raid-trigger extension row
/// selects raid posting; a job with neither is skipped.
pub async fn resolve_action(
    db: &DatabaseConnection,
    job: &entity::scheduled_job::Model,
) -> Result<JobAction, AppError> {
    if let Some(category_id) = job.category_id {
        return Ok(JobAction::CreateChannel { category_id });
    }

    match RaidTriggerRepository::new(db).get_by_job_id(job.id).await? {
        Some(raid) => Ok(JobAction::PostRaid(raid)),
        None => Ok(JobAction::Skip),
    }
}

/// Runs one firing of a job to completion.
///
/// Resolution failures (missing guild, unusable stored ids) are logged and
/// swallowed so the job keeps firing on later cycles; Discord API errors
/// propagate to the trigger closure, which logs them.
pub async fn run(
    db: &DatabaseConnection,
    http: Arc<Http>,
    timezone: Tz,
    job: &entity::scheduled_job::Model,
) -> Result<(), AppError> {
    match resolve_action(db, job).await? {
        JobAction::CreateChannel { category_id } => {
            create_scheduled_channel(db, http, timezone, job, category_id).await
        }
        JobAction::PostRaid(raid) => post_raid_command(http, timezone, job, &raid).await,
        JobAction::Skip => {
            tracing::warn!(
                "Job {} ({}) has neither a category nor a raid trigger, nothing to do",
                job.id,
                job.name
            );
            Ok(())
        }
    }
}

/// Reads the date format out of the job's serialized formatting options.
/// Malformed stored metadata falls back to defaults.
fn stored_date_format(job: &entity::scheduled_job::Model) -> Option<String> {
    let raw = job.description.as_deref()?;

    match serde_json::from_str::<ChannelNameOptions>(raw) {
        Ok(options) => options.date_format,
        Err(e) => {
            tracing::debug!(
                "Job {} has unparseable formatting options, using defaults: {}",
                job.id,
                e
            );
            None
        }
    }
}

/// Creates a dated text channel under the job's category.
///
/// One externally-visible channel creation per firing; there is no
/// idempotency key, so a duplicate firing creates a duplicate channel.
async fn create_scheduled_channel(
    db: &DatabaseConnection,
    http: Arc<Http>,
    timezone: Tz,
    job: &entity::scheduled_job::Model,
    category_id: i64,
) -> Result<(), AppError> {
    let guild = match GuildRepository::new(db).find_by_id(job.guild_instance_id).await? {
        Some(guild) => guild,
        None => {
            tracing::error!(
                "Guild instance {} for job {} not found, cannot create channel",
                job.guild_instance_id,
                job.id
            );
            return Ok(());
        }
    };

    if guild.guild_id <= 0 || category_id <= 0 {
        tracing::error!(
            "Job {} has unusable guild or category id ({}, {})",
            job.id,
            guild.guild_id,
            category_id
        );
        return Ok(());
    }

    let today = Utc::now().with_timezone(&timezone).date_naive();
    let name = format::channel_name(&job.name, today, stored_date_format(job).as_deref());

    let builder = CreateChannel::new(name.as_str())
        .kind(ChannelType::Text)
        .category(ChannelId::new(category_id as u64));

    GuildId::new(guild.guild_id as u64)
        .create_channel(&http, builder)
        .await?;

    tracing::info!("Job {} created channel {} in guild {}", job.id, name, guild.guild_id);

    Ok(())
}

/// Posts the raid-creation command string into the stored target channel.
async fn post_raid_command(
    http: Arc<Http>,
    timezone: Tz,
    job: &entity::scheduled_job::Model,
    raid: &entity::raid_trigger_event::Model,
) -> Result<(), AppError> {
    if raid.channel_id <= 0 {
        tracing::error!(
            "Raid trigger for job {} has unusable channel id {}",
            job.id,
            raid.channel_id
        );
        return Ok(());
    }

    let today = Utc::now().with_timezone(&timezone).date_naive();
    let content = format::raid_command(raid, today);

    ChannelId::new(raid.channel_id as u64)
        .send_message(&http, CreateMessage::new().content(content))
        .await?;

    tracing::info!(
        "Job {} posted raid command for '{}' into channel {}",
        job.id,
        raid.title,
        raid.channel_id
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn category_job_dispatches_to_channel_creation() -> Result<(), AppError> {
        let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let guild = factory::guild_instance::create_guild(db).await?;
        let job = factory::scheduled_job::ScheduledJobFactory::new(db, guild.id)
            .category_id(Some(4200))
            .build()
            .await?;

        let action = resolve_action(db, &job).await?;

        assert_eq!(action, JobAction::CreateChannel { category_id: 4200 });

        Ok(())
    }

    #[tokio::test]
    async fn category_takes_precedence_over_raid_extension() -> Result<(), AppError> {
        let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let guild = factory::guild_instance::create_guild(db).await?;
        let job = factory::scheduled_job::ScheduledJobFactory::new(db, guild.id)
            .category_id(Some(4200))
            .build()
            .await?;
        factory::raid_trigger::create_raid_trigger(db, job.id).await?;

        let action = resolve_action(db, &job).await?;

        assert_eq!(action, JobAction::CreateChannel { category_id: 4200 });

        Ok(())
    }

    #[tokio::test]
    async fn raid_extension_selects_raid_posting() -> Result<(), AppError> {
        let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let guild = factory::guild_instance::create_guild(db).await?;
        let job = factory::scheduled_job::create_job(db, guild.id).await?;
        let raid = factory::raid_trigger::create_raid_trigger(db, job.id).await?;

        let action = resolve_action(db, &job).await?;

        assert_eq!(action, JobAction::PostRaid(raid));

        Ok(())
    }

    #[tokio::test]
    async fn job_with_neither_behavior_is_skipped() -> Result<(), AppError> {
        let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let guild = factory::guild_instance::create_guild(db).await?;
        let job = factory::scheduled_job::create_job(db, guild.id).await?;

        let action = resolve_action(db, &job).await?;

        assert_eq!(action, JobAction::Skip);

        Ok(())
    }

    #[test]
    fn malformed_formatting_options_fall_back_to_defaults() {
        let mut job = entity::scheduled_job::Model {
            id: 1,
            guild_instance_id: 1,
            name: "raid".to_string(),
            description: Some("{not json".to_string()),
            schedule: "0 8 * * *".to_string(),
            is_active: true,
            category_id: Some(1),
            created_at: chrono::Utc::now(),
        };

        assert_eq!(stored_date_format(&job), None);

        job.description = Some(r#"{"date_format":"dd-MM-yyyy"}"#.to_string());
        assert_eq!(stored_date_format(&job), Some("dd-MM-yyyy".to_string()));

        job.description = Some("plain human text".to_string());
        assert_eq!(stored_date_format(&job), None);

        job.description = None;
        assert_eq!(stored_date_format(&job), None);
    }
}
