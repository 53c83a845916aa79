//! `/apply`: the applicant side of application forms.
//!
//! An application is created pending, filled in one answer at a time, and
//! submitted once every question is answered. The review lifecycle is driven
//! from `/review`; the applicant can only withdraw.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::command::helper;
use crate::data::{application::ApplicationRepository, form::FormRepository};
use crate::error::AppError;
use crate::model::application::ApplicationStatus;
use crate::service::application as application_service;

pub fn register() -> CreateCommand {
    CreateCommand::new("apply")
        .description("Apply to this server")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "start",
                "Start an application",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "form", "Form name")
                    .required(true),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "answer",
                "Answer one question of your application",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "form", "Form name")
                    .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "question",
                    "Question number",
                )
                .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "value", "Your answer")
                    .required(true),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "submit",
                "Submit your application for review",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "form", "Form name")
                    .required(true),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "withdraw",
                "Withdraw your application",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "form", "Form name")
                    .required(true),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "status",
                "Show the state of your application",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "form", "Form name")
                    .required(true),
            ),
        )
}

pub async fn handle(
    ctx: &Context,
    cmd: &CommandInteraction,
    db: &DatabaseConnection,
) -> Result<String, AppError> {
    let options = cmd.data.options();
    let (sub, args) = helper::subcommand(&options)?;
    let guild = helper::resolve_guild(ctx, cmd, db).await?;
    let user_id = cmd.user.id.get() as i64;

    let form_name = helper::require_str(args, "form")?;
    let form_repo = FormRepository::new(db);
    let application_repo = ApplicationRepository::new(db);

    let Some(form) = form_repo.get_by_name(guild.id, form_name).await? else {
        return Err(AppError::NotFound(format!("No form named '{}'.", form_name)));
    };

    match sub {
        "start" => {
            if let Some(existing) = application_repo.find(form.id, user_id).await? {
                return Err(AppError::BadRequest(format!(
                    "You already have a {} application for '{}'.",
                    existing.status, form_name
                )));
            }

            let questions = form_repo.questions(form.id).await?;
            if questions.is_empty() {
                return Err(AppError::BadRequest(format!(
                    "Form '{}' has no questions yet.",
                    form_name
                )));
            }

            application_repo.create(form.id, user_id).await?;

            let mut lines = vec![format!(
                "Application for '{}' started. Answer with `/apply answer`:",
                form_name
            )];
            for question in questions {
                let mut line = format!("{}. {} [{}]", question.position, question.label, question.question_type);
                if let Some(question_options) = &question.options {
                    line.push_str(&format!(" ({})", question_options.trim()));
                }
                lines.push(line);
            }

            Ok(lines.join("\n"))
        }
        "answer" => {
            let position = helper::require_i64(args, "question")?;
            let value = helper::require_str(args, "value")?;

            let application = require_pending(&application_repo, form.id, user_id, form_name).await?;

            let Some(question) = form_repo.question_at(form.id, position as i32).await? else {
                return Err(AppError::NotFound(format!(
                    "Form '{}' has no question {}.",
                    form_name, position
                )));
            };

            if let Err(message) = application_service::validate_answer(&question, value) {
                return Err(AppError::BadRequest(message));
            }

            application_repo
                .upsert_answer(application.id, question.id, value.trim())
                .await?;

            Ok(format!("Answer to question {} saved.", position))
        }
        "submit" => {
            let application = require_pending(&application_repo, form.id, user_id, form_name).await?;

            let questions = form_repo.questions(form.id).await?;
            let answered: HashSet<i32> = application_repo
                .answers(application.id)
                .await?
                .into_iter()
                .map(|answer| answer.question_id)
                .collect();

            let missing = application_service::missing_positions(&questions, &answered);
            if !missing.is_empty() {
                let positions: Vec<String> = missing.iter().map(ToString::to_string).collect();
                return Err(AppError::BadRequest(format!(
                    "Questions {} are still unanswered.",
                    positions.join(", ")
                )));
            }

            Ok(format!(
                "Application for '{}' is complete and awaiting review.",
                form_name
            ))
        }
        "withdraw" => {
            let application = require_pending(&application_repo, form.id, user_id, form_name).await?;

            application_repo
                .set_status(application.id, ApplicationStatus::Withdrawn)
                .await?;

            Ok(format!("Application for '{}' withdrawn.", form_name))
        }
        "status" => {
            let Some(application) = application_repo.find(form.id, user_id).await? else {
                return Err(AppError::NotFound(format!(
                    "You have no application for '{}'.",
                    form_name
                )));
            };

            let questions = form_repo.questions(form.id).await?;
            let answers = application_repo.answers(application.id).await?;

            Ok(format!(
                "Application for '{}': {} ({}/{} questions answered).",
                form_name,
                application.status,
                answers.len(),
                questions.len()
            ))
        }
        other => Err(AppError::BadRequest(format!(
            "Unknown subcommand '{}'.",
            other
        ))),
    }
}

/// Loads the caller's application and insists it is still pending.
async fn require_pending(
    repo: &ApplicationRepository<'_>,
    form_id: i32,
    user_id: i64,
    form_name: &str,
) -> Result<entity::player_application::Model, AppError> {
    let Some(application) = repo.find(form_id, user_id).await? else {
        return Err(AppError::NotFound(format!(
            "You have no application for '{}'. Use `/apply start` first.",
            form_name
        )));
    };

    match ApplicationStatus::parse(&application.status) {
        Some(status) if !status.is_terminal() => Ok(application),
        _ => Err(AppError::BadRequest(format!(
            "Your application for '{}' is already {}.",
            form_name, application.status
        ))),
    }
}
