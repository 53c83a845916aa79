//! `/form`: application form administration.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions,
};

use crate::command::helper;
use crate::data::form::FormRepository;
use crate::error::AppError;
use crate::model::application::{AddQuestionParams, QuestionType};
use crate::service::application as application_service;

pub fn register() -> CreateCommand {
    CreateCommand::new("form")
        .description("Manage application forms")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "create",
                "Create an application form",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "name", "Form name")
                    .required(true),
            )
            .add_sub_option(CreateCommandOption::new(
                CommandOptionType::String,
                "description",
                "Form description",
            )),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "delete",
                "Delete a form and all its applications",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "name", "Form name")
                    .required(true),
            ),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "list",
            "List this server's forms",
        ))
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "question-add",
                "Append a question to a form",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "form", "Form name")
                    .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "label", "Question text")
                    .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "type", "Answer type")
                    .required(true)
                    .add_string_choice("Free text", "text")
                    .add_string_choice("Single choice", "select")
                    .add_string_choice("Multiple choice", "checkbox")
                    .add_string_choice("Number", "number"),
            )
            .add_sub_option(CreateCommandOption::new(
                CommandOptionType::String,
                "options",
                "Comma-separated options (required for choice questions)",
            )),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "question-remove",
                "Remove a question from a form",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "form", "Form name")
                    .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "position",
                    "Question number to remove",
                )
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
    let repo = FormRepository::new(db);

    match sub {
        "create" => {
            let name = helper::require_str(args, "name")?;
            let description = helper::get_str(args, "description");

            if repo.get_by_name(guild.id, name).await?.is_some() {
                return Err(AppError::BadRequest(format!(
                    "A form named '{}' already exists.",
                    name
                )));
            }

            repo.create(guild.id, name, description.map(String::from))
                .await?;

            Ok(format!("Form '{}' created. Add questions with `/form question-add`.", name))
        }
        "delete" => {
            let name = helper::require_str(args, "name")?;

            let Some(form) = repo.get_by_name(guild.id, name).await? else {
                return Err(AppError::NotFound(format!("No form named '{}'.", name)));
            };

            repo.delete(form.id).await?;

            Ok(format!("Form '{}' deleted.", name))
        }
        "list" => {
            let forms = repo.get_all(guild.id).await?;

            if forms.is_empty() {
                return Ok("No application forms configured.".to_string());
            }

            let mut lines = vec!["**Application forms**".to_string()];
            for form in forms {
                let questions = repo.questions(form.id).await?;
                lines.push(format!("- `{}` ({} questions)", form.name, questions.len()));
            }

            Ok(lines.join("\n"))
        }
        "question-add" => {
            let form_name = helper::require_str(args, "form")?;
            let label = helper::require_str(args, "label")?;
            let type_value = helper::require_str(args, "type")?;
            let question_options = helper::get_str(args, "options");

            let Some(form) = repo.get_by_name(guild.id, form_name).await? else {
                return Err(AppError::NotFound(format!("No form named '{}'.", form_name)));
            };

            let Some(question_type) = QuestionType::parse(type_value) else {
                return Err(AppError::BadRequest(format!(
                    "Unknown question type '{}'.",
                    type_value
                )));
            };

            if question_type.requires_options()
                && application_service::parse_options(question_options).is_empty()
            {
                return Err(AppError::BadRequest(
                    "Choice questions need a comma-separated options list.".to_string(),
                ));
            }

            let question = repo
                .add_question(AddQuestionParams {
                    form_id: form.id,
                    label: label.to_string(),
                    question_type,
                    options: question_options.map(String::from),
                })
                .await?;

            Ok(format!(
                "Question {} added to form '{}'.",
                question.position, form_name
            ))
        }
        "question-remove" => {
            let form_name = helper::require_str(args, "form")?;
            let position = helper::require_i64(args, "position")?;

            let Some(form) = repo.get_by_name(guild.id, form_name).await? else {
                return Err(AppError::NotFound(format!("No form named '{}'.", form_name)));
            };

            if repo.remove_question(form.id, position as i32).await? {
                Ok(format!(
                    "Question {} removed from form '{}'.",
                    position, form_name
                ))
            } else {
                Err(AppError::NotFound(format!(
                    "Form '{}' has no question {}.",
                    form_name, position
                )))
            }
        }
        other => Err(AppError::BadRequest(format!(
            "Unknown subcommand '{}'.",
            other
        ))),
    }
}
