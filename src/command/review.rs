//! `/review`: the admin side of application review.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions,
};

use crate::command::helper;
use crate::data::{application::ApplicationRepository, form::FormRepository};
use crate::error::AppError;
use crate::model::application::ApplicationStatus;

pub fn register() -> CreateCommand {
    CreateCommand::new("review")
        .description("Review player applications")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "list",
                "List applications for a form",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "form", "Form name")
                    .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "status", "Filter by status")
                    .add_string_choice("Pending", "pending")
                    .add_string_choice("Approved", "approved")
                    .add_string_choice("Rejected", "rejected")
                    .add_string_choice("Withdrawn", "withdrawn"),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "approve",
                "Approve an application",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "form", "Form name")
                    .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "Applicant")
                    .required(true),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "reject",
                "Reject an application",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "form", "Form name")
                    .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "Applicant")
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

    let form_name = helper::require_str(args, "form")?;
    let form_repo = FormRepository::new(db);
    let application_repo = ApplicationRepository::new(db);

    let Some(form) = form_repo.get_by_name(guild.id, form_name).await? else {
        return Err(AppError::NotFound(format!("No form named '{}'.", form_name)));
    };

    match sub {
        "list" => {
            let status = helper::get_str(args, "status").and_then(ApplicationStatus::parse);
            let applications = application_repo.list_by_form(form.id, status).await?;

            if applications.is_empty() {
                return Ok(format!("No applications for '{}'.", form_name));
            }

            let mut lines = vec![format!("**Applications for '{}'**", form_name)];
            for application in applications {
                lines.push(format!(
                    "- <@{}>: {}",
                    application.user_id, application.status
                ));
            }

            Ok(lines.join("\n"))
        }
        "approve" | "reject" => {
            let user = helper::require_user(args, "user")?;
            let next = if sub == "approve" {
                ApplicationStatus::Approved
            } else {
                ApplicationStatus::Rejected
            };

            let Some(application) = application_repo.find(form.id, user.get() as i64).await? else {
                return Err(AppError::NotFound(format!(
                    "<@{}> has no application for '{}'.",
                    user, form_name
                )));
            };

            let current = ApplicationStatus::parse(&application.status);
            if !current.is_some_and(|current| current.can_transition_to(next)) {
                return Err(AppError::BadRequest(format!(
                    "The application of <@{}> is already {}.",
                    user, application.status
                )));
            }

            application_repo.set_status(application.id, next).await?;

            Ok(format!(
                "Application of <@{}> for '{}' {}.",
                user,
                form_name,
                next.as_str()
            ))
        }
        other => Err(AppError::BadRequest(format!(
            "Unknown subcommand '{}'.",
            other
        ))),
    }
}
