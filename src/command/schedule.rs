//! `/schedule`: scheduled channel-creation jobs and trigger maintenance.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions,
};

use crate::command::helper;
use crate::data::scheduled_job::ScheduledJobRepository;
use crate::error::AppError;
use crate::model::job::{ChannelNameOptions, CreateScheduledJobParams};
use crate::scheduler::{expression, registry::JobRegistry};

pub fn register() -> CreateCommand {
    CreateCommand::new("schedule")
        .description("Manage scheduled jobs")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "channel",
                "Create a job that creates a dated text channel on schedule",
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "name",
                    "Job name, also used as the channel base name",
                )
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
                    "category",
                    "Category the channel is created under",
                )
                .required(true),
            )
            .add_sub_option(CreateCommandOption::new(
                CommandOptionType::String,
                "date-format",
                "Date pattern appended to the channel name (default yyyy-MM-dd)",
            )),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "remove", "Delete a job")
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::String, "name", "Job name")
                        .required(true),
                ),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "list",
            "List all jobs of this server",
        ))
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "enable",
                "Mark a job active (applied at the next refresh)",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "name", "Job name")
                    .required(true),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "disable",
                "Mark a job inactive (applied at the next refresh)",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "name", "Job name")
                    .required(true),
            ),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "refresh",
            "Stop all triggers and reload them from stored jobs",
        ))
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
    let repo = ScheduledJobRepository::new(db);

    match sub {
        "channel" => {
            let name = helper::require_str(args, "name")?;
            let cron = helper::require_str(args, "cron")?;
            let category = helper::require_channel(args, "category")?;
            let date_format = helper::get_str(args, "date-format");

            if !expression::is_valid(cron) {
                return Err(AppError::BadRequest(format!(
                    "'{}' is not a valid 5-field cron expression.",
                    cron
                )));
            }

            if repo.exists_in_guild(guild.id, name).await? {
                return Err(AppError::BadRequest(format!(
                    "A job named '{}' already exists.",
                    name
                )));
            }

            let description = date_format
                .map(|pattern| {
                    serde_json::to_string(&ChannelNameOptions {
                        date_format: Some(pattern.to_string()),
                    })
                })
                .transpose()
                .map_err(|e| AppError::InternalError(e.to_string()))?;

            repo.create(CreateScheduledJobParams {
                guild_instance_id: guild.id,
                name: name.to_string(),
                description,
                schedule: cron.trim().to_string(),
                category_id: Some(category.get() as i64),
            })
            .await?;

            registry.refresh().await?;

            Ok(format!(
                "Scheduled channel job '{}' created on `{}`.",
                name, cron
            ))
        }
        "remove" => {
            let name = helper::require_str(args, "name")?;

            let Some(job) = repo.get_by_name(guild.id, name).await? else {
                return Err(AppError::NotFound(format!("No job named '{}'.", name)));
            };

            repo.delete(job.id).await?;
            registry.refresh().await?;

            Ok(format!("Job '{}' removed.", name))
        }
        "list" => {
            let jobs = repo.get_by_guild(guild.id).await?;

            if jobs.is_empty() {
                return Ok("No scheduled jobs configured.".to_string());
            }

            let registered = registry.registered_job_ids().await;

            let mut lines = vec!["**Scheduled jobs**".to_string()];
            for job in jobs {
                let kind = if job.category_id.is_some() {
                    "channel"
                } else {
                    "raid"
                };
                let state = if job.is_active { "active" } else { "inactive" };
                let live = if registered.contains(&job.id) { ", live" } else { "" };
                lines.push(format!(
                    "- `{}` ({}, `{}`, {}{})",
                    job.name, kind, job.schedule, state, live
                ));
            }

            Ok(lines.join("\n"))
        }
        "enable" | "disable" => {
            let name = helper::require_str(args, "name")?;
            let activate = sub == "enable";

            let Some(job) = repo.get_by_name(guild.id, name).await? else {
                return Err(AppError::NotFound(format!("No job named '{}'.", name)));
            };

            repo.set_active(job.id, activate).await?;

            Ok(format!(
                "Job '{}' {}. The change applies at the next refresh; run `/schedule refresh` to apply it now.",
                name,
                if activate { "enabled" } else { "disabled" }
            ))
        }
        "refresh" => {
            let count = registry.refresh().await?;

            Ok(format!("Reloaded triggers for {} active jobs.", count))
        }
        other => Err(AppError::BadRequest(format!(
            "Unknown subcommand '{}'.",
            other
        ))),
    }
}
