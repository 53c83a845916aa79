//! `/welcome`: per-guild welcome message configuration.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions,
};

use crate::command::helper;
use crate::data::welcome::WelcomeRepository;
use crate::error::AppError;
use crate::model::welcome::UpsertWelcomeParams;

pub fn register() -> CreateCommand {
    CreateCommand::new("welcome")
        .description("Configure the welcome message for new members")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "set",
                "Set the welcome template ({user}, {username} and {guild} are replaced)",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "template", "Template text")
                    .required(true),
            ),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "enable",
            "Enable the welcome message",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "disable",
            "Disable the welcome message",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "show",
            "Show the current welcome configuration",
        ))
}

pub async fn handle(
    ctx: &Context,
    cmd: &CommandInteraction,
    db: &DatabaseConnection,
) -> Result<String, AppError> {
    let options = cmd.data.options();
    let (sub, args) = helper::subcommand(&options)?;
    let guild = helper::resolve_guild(ctx, cmd, db).await?;
    let repo = WelcomeRepository::new(db);

    match sub {
        "set" => {
            let template = helper::require_str(args, "template")?;

            repo.upsert(UpsertWelcomeParams {
                guild_instance_id: guild.id,
                template: template.to_string(),
            })
            .await?;

            Ok("Welcome message template saved.".to_string())
        }
        "enable" | "disable" => {
            let enable = sub == "enable";

            match repo.set_enabled(guild.id, enable).await? {
                Some(_) => Ok(format!(
                    "Welcome message {}.",
                    if enable { "enabled" } else { "disabled" }
                )),
                None => Err(AppError::NotFound(
                    "No welcome message configured yet. Use `/welcome set` first.".to_string(),
                )),
            }
        }
        "show" => match repo.get_by_guild(guild.id).await? {
            Some(welcome) => Ok(format!(
                "Welcome message ({}):\n{}",
                if welcome.enabled { "enabled" } else { "disabled" },
                welcome.template
            )),
            None => Ok("No welcome message configured.".to_string()),
        },
        other => Err(AppError::BadRequest(format!(
            "Unknown subcommand '{}'.",
            other
        ))),
    }
}
