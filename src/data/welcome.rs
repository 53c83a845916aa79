use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::welcome::UpsertWelcomeParams;

pub struct WelcomeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WelcomeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_guild(
        &self,
        guild_instance_id: i32,
    ) -> Result<Option<entity::welcome_message::Model>, DbErr> {
        entity::prelude::WelcomeMessage::find()
            .filter(entity::welcome_message::Column::GuildInstanceId.eq(guild_instance_id))
            .one(self.db)
            .await
    }

    /// Sets the guild's welcome template, creating the row enabled on first
    /// use and preserving the enabled flag on update.
    pub async fn upsert(
        &self,
        params: UpsertWelcomeParams,
    ) -> Result<entity::welcome_message::Model, DbErr> {
        if let Some(existing) = self.get_by_guild(params.guild_instance_id).await? {
            let mut active: entity::welcome_message::ActiveModel = existing.into();
            active.template = ActiveValue::Set(params.template);
            return active.update(self.db).await;
        }

        entity::welcome_message::ActiveModel {
            guild_instance_id: ActiveValue::Set(params.guild_instance_id),
            template: ActiveValue::Set(params.template),
            enabled: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Flips the enabled flag for a guild's welcome message.
    pub async fn set_enabled(
        &self,
        guild_instance_id: i32,
        enabled: bool,
    ) -> Result<Option<entity::welcome_message::Model>, DbErr> {
        let Some(existing) = self.get_by_guild(guild_instance_id).await? else {
            return Ok(None);
        };

        let mut active: entity::welcome_message::ActiveModel = existing.into();
        active.enabled = ActiveValue::Set(enabled);
        active.update(self.db).await.map(Some)
    }
}
