pub use super::application_answer::Entity as ApplicationAnswer;
pub use super::application_form::Entity as ApplicationForm;
pub use super::form_question::Entity as FormQuestion;
pub use super::guild_instance::Entity as GuildInstance;
pub use super::player_application::Entity as PlayerApplication;
pub use super::raid_trigger_event::Entity as RaidTriggerEvent;
pub use super::scheduled_job::Entity as ScheduledJob;
pub use super::welcome_message::Entity as WelcomeMessage;
