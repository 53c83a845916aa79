//! `/raidplan`: scheduled raid-creation triggers.
//!
//! A raid plan is a scheduled job without a category reference plus a
//! raid-trigger extension row. Each firing posts the raid-creation command
//! string into the configured channel for a third-party raid bot to pick up.

use std::sync::Arc;

use chrono::NaiveTime;
use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions,
};

use crate::command::helper;
use crate::data::{raid_trigger::RaidTriggerRepository, scheduled_job::ScheduledJobRepository};
use crate::error::AppError;
use crate::model::{job::CreateScheduledJobParams, raid::CreateRaidTriggerParams};
use crate::scheduler::{expression, registry::JobRegistry};

pub fn register() -> CreateCommand {
    CreateCommand::new("raidplan")
        .description("Manage scheduled raid triggers")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "add",
                "Create a scheduled raid trigger",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "name", "Job name")
                    .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "cron",
                    "5-field cron expression (minute hour day month weekday)",
                )
                .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::Channel,
                    "channel",
                    "Channel the raid command is posted into",
                )
                .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "title", "Raid title")
                    .required(true),
            )
            .add_sub_option(CreateCommandOption::new(
                CommandOptionType::String,
                "description",
                "Raid description",
            ))
            .add_sub_option(CreateCommandOption::new(
                CommandOptionType::String,
                "time",
                "Raid time as HH:MM (default 20:00)",
            ))
            .add_sub_option(CreateCommandOption::new(
                CommandOptionType::String,
                "template",
                "Raid bot template id",
            ))
            .add_sub_option(CreateCommandOption::new(
                CommandOptionType::Integer,
                "cap",
                "Participant cap",
            )),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "remove",
                "Delete a raid trigger and its job",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "name", "Job name")
                    .required(true),
            ),
        )
}

pub async fn handle(
    ctx: &Context,
    cmd: &CommandInteraction,
    db: &DatabaseConnection,
    registry: &Arc<JobRegistry>,
) -> Result<String, AppError> {
    let options = cmd.data.options();
    let (sub, args) = helper::subcommand(&options)?;
    let guild = helper::resolve_guild(ctx, cmd, db).await?;
    let job_repo = ScheduledJobRepository::new(db);

    match sub {
        "add" => {
            let name = helper::require_str(args, "name")?;
            let cron = helper::require_str(args, "cron")?;
            let channel = helper::require_channel(args, "channel")?;
            let title = helper::require_str(args, "title")?;
            let description = helper::get_str(args, "description");
            let time = helper::get_str(args, "time");
            let template = helper::get_str(args, "template");
            let cap = helper::get_i64(args, "cap");

            if !expression::is_valid(cron) {
                return Err(AppError::BadRequest(format!(
                    "'{}' is not a valid 5-field cron expression.",
                    cron
                )));
            }

            if let Some(time) = time {
                if NaiveTime::parse_from_str(time, "%H:%M").is_err() {
                    return Err(AppError::BadRequest(format!(
                        "'{}' is not a valid time, expected HH:MM.",
                        time
                    )));
                }
            }

            if job_repo.exists_in_guild(guild.id, name).await? {
                return Err(AppError::BadRequest(format!(
                    "A job named '{}' already exists.",
                    name
                )));
            }

            let job = job_repo
                .create(CreateScheduledJobParams {
                    guild_instance_id: guild.id,
                    name: name.to_string(),
                    description: None,
                    schedule: cron.trim().to_string(),
                    category_id: None,
                })
                .await?;

            RaidTriggerRepository::new(db)
                .create(CreateRaidTriggerParams {
                    scheduled_job_id: job.id,
                    title: title.to_string(),
                    description: description.map(String::from),
                    raid_time: time.map(String::from),
                    participant_cap: cap.map(|cap| cap as i32),
                    channel_id: channel.get() as i64,
                    template_id: template.map(String::from),
                })
                .await?;

            registry.refresh().await?;

            Ok(format!("Raid trigger '{}' created on `{}`.", name, cron))
        }
        "remove" => {
            let name = helper::require_str(args, "name")?;

            let Some(job) = job_repo.get_by_name(guild.id, name).await? else {
                return Err(AppError::NotFound(format!("No job named '{}'.", name)));
            };

            job_repo.delete(job.id).await?;
            registry.refresh().await?;

            Ok(format!("Raid trigger '{}' removed.", name))
        }
        other => Err(AppError::BadRequest(format!(
            "Unknown subcommand '{}'.",
            other
        ))),
    }
}
