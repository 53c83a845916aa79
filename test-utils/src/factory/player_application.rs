//! Player application factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test player applications, pending by default.
pub struct PlayerApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    form_id: i32,
    user_id: i64,
    status: String,
}

impl<'a> PlayerApplicationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, form_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            form_id,
            user_id: 300_000 + id as i64,
            status: "pending".to_string(),
        }
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::player_application::Model, DbErr> {
        entity::player_application::ActiveModel {
            form_id: ActiveValue::Set(self.form_id),
            user_id: ActiveValue::Set(self.user_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending application from a generated user.
pub async fn create_application(
    db: &DatabaseConnection,
    form_id: i32,
) -> Result<entity::player_application::Model, DbErr> {
    PlayerApplicationFactory::new(db, form_id).build().await
}
