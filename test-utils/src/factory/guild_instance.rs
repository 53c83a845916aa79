//! Guild instance factory for creating test guild entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test guild instances with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_instance::GuildInstanceFactory;
///
/// let guild = GuildInstanceFactory::new(&db)
///     .guild_id(987654321)
///     .name("CustomGuild")
///     .build()
///     .await?;
/// ```
pub struct GuildInstanceFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    name: String,
}

impl<'a> GuildInstanceFactory<'a> {
    /// Creates a new factory with defaults: a unique snowflake-like guild id
    /// and a matching `Guild {id}` name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: 100_000 + id as i64,
            name: format!("Guild {}", id),
        }
    }

    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::guild_instance::Model, DbErr> {
        entity::guild_instance::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild instance with default values.
pub async fn create_guild(
    db: &DatabaseConnection,
) -> Result<entity::guild_instance::Model, DbErr> {
    GuildInstanceFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_unique_guilds() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(GuildInstance)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_guild(db).await?;
        let second = create_guild(db).await?;

        assert_ne!(first.guild_id, second.guild_id);
        assert_ne!(first.name, second.name);

        Ok(())
    }

    #[tokio::test]
    async fn creates_guild_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(GuildInstance)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let guild = GuildInstanceFactory::new(db)
            .guild_id(987654321)
            .name("CustomGuild")
            .build()
            .await?;

        assert_eq!(guild.guild_id, 987654321);
        assert_eq!(guild.name, "CustomGuild");

        Ok(())
    }
}
