//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `*Factory` builder for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories automatically generate unique names and ids to
//! prevent collisions in tests.

pub mod application_form;
pub mod form_question;
pub mod guild_instance;
pub mod helpers;
pub mod player_application;
pub mod raid_trigger;
pub mod scheduled_job;
pub mod welcome_message;

// Re-export commonly used factory functions for concise usage
pub use application_form::create_form;
pub use form_question::create_question;
pub use guild_instance::create_guild;
pub use player_application::create_application;
pub use raid_trigger::create_raid_trigger;
pub use scheduled_job::create_job;
pub use welcome_message::create_welcome_message;
