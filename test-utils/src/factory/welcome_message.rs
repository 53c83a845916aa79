//! Welcome message factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test welcome messages.
///
/// Defaults: enabled, with a template using all placeholder tokens.
pub struct WelcomeMessageFactory<'a> {
    db: &'a DatabaseConnection,
    guild_instance_id: i32,
    template: String,
    enabled: bool,
}

impl<'a> WelcomeMessageFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_instance_id: i32) -> Self {
        Self {
            db,
            guild_instance_id,
            template: "Welcome {user} to {guild}!".to_string(),
            enabled: true,
        }
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub async fn build(self) -> Result<entity::welcome_message::Model, DbErr> {
        entity::welcome_message::ActiveModel {
            guild_instance_id: ActiveValue::Set(self.guild_instance_id),
            template: ActiveValue::Set(self.template),
            enabled: ActiveValue::Set(self.enabled),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an enabled welcome message with the default template.
pub async fn create_welcome_message(
    db: &DatabaseConnection,
    guild_instance_id: i32,
) -> Result<entity::welcome_message::Model, DbErr> {
    WelcomeMessageFactory::new(db, guild_instance_id).build().await
}
