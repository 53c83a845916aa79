use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct GuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up the guild instance for a Discord guild, creating it on first
    /// use. An existing row has its display name refreshed when it changed.
    pub async fn get_or_create(
        &self,
        guild_id: i64,
        name: &str,
    ) -> Result<entity::guild_instance::Model, DbErr> {
        if let Some(existing) = self.find_by_guild_id(guild_id).await? {
            if existing.name == name {
                return Ok(existing);
            }

            let mut active: entity::guild_instance::ActiveModel = existing.into();
            active.name = ActiveValue::Set(name.to_string());
            return active.update(self.db).await;
        }

        entity::guild_instance::ActiveModel {
            guild_id: ActiveValue::Set(guild_id),
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a guild instance by its Discord guild snowflake.
    pub async fn find_by_guild_id(
        &self,
        guild_id: i64,
    ) -> Result<Option<entity::guild_instance::Model>, DbErr> {
        entity::prelude::GuildInstance::find()
            .filter(entity::guild_instance::Column::GuildId.eq(guild_id))
            .one(self.db)
            .await
    }

    /// Finds a guild instance by its primary key.
    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::guild_instance::Model>, DbErr> {
        entity::prelude::GuildInstance::find_by_id(id).one(self.db).await
    }

    /// Refreshes the stored display name for a known guild. Unknown guilds
    /// are left alone; instances are only created on first command use.
    pub async fn update_name(&self, guild_id: i64, name: &str) -> Result<(), DbErr> {
        if let Some(existing) = self.find_by_guild_id(guild_id).await? {
            if existing.name != name {
                let mut active: entity::guild_instance::ActiveModel = existing.into();
                active.name = ActiveValue::Set(name.to_string());
                active.update(self.db).await?;
            }
        }

        Ok(())
    }
}
