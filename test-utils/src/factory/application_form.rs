//! Application form factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test application forms.
pub struct ApplicationFormFactory<'a> {
    db: &'a DatabaseConnection,
    guild_instance_id: i32,
    name: String,
    description: Option<String>,
}

impl<'a> ApplicationFormFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_instance_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            guild_instance_id,
            name: format!("form-{}", id),
            description: Some("Test form description".to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub async fn build(self) -> Result<entity::application_form::Model, DbErr> {
        entity::application_form::ActiveModel {
            guild_instance_id: ActiveValue::Set(self.guild_instance_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an application form with default values.
pub async fn create_form(
    db: &DatabaseConnection,
    guild_instance_id: i32,
) -> Result<entity::application_form::Model, DbErr> {
    ApplicationFormFactory::new(db, guild_instance_id).build().await
}
