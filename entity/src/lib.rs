//! SeaORM entity models for the guildkeeper database schema.

pub mod prelude;

pub mod application_answer;
pub mod application_form;
pub mod form_question;
pub mod guild_instance;
pub mod player_application;
pub mod raid_trigger_event;
pub mod scheduled_job;
pub mod welcome_message;
