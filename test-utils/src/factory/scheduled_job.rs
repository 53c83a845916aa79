//! Scheduled job factory for creating test job entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test scheduled jobs with customizable fields.
///
/// Defaults: a unique `job-{id}` name, schedule `0 8 * * *`, active, no
/// description and no category reference.
pub struct ScheduledJobFactory<'a> {
    db: &'a DatabaseConnection,
    guild_instance_id: i32,
    name: String,
    description: Option<String>,
    schedule: String,
    is_active: bool,
    category_id: Option<i64>,
}

impl<'a> ScheduledJobFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_instance_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            guild_instance_id,
            name: format!("job-{}", id),
            description: None,
            schedule: "0 8 * * *".to_string(),
            is_active: true,
            category_id: None,
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

    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = schedule.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn category_id(mut self, category_id: Option<i64>) -> Self {
        self.category_id = category_id;
        self
    }

    pub async fn build(self) -> Result<entity::scheduled_job::Model, DbErr> {
        entity::scheduled_job::ActiveModel {
            id: ActiveValue::NotSet,
            guild_instance_id: ActiveValue::Set(self.guild_instance_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            schedule: ActiveValue::Set(self.schedule),
            is_active: ActiveValue::Set(self.is_active),
            category_id: ActiveValue::Set(self.category_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active scheduled job with default values.
pub async fn create_job(
    db: &DatabaseConnection,
    guild_instance_id: i32,
) -> Result<entity::scheduled_job::Model, DbErr> {
    ScheduledJobFactory::new(db, guild_instance_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::guild_instance::create_guild;

    #[tokio::test]
    async fn creates_job_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let guild = create_guild(db).await?;
        let job = create_job(db, guild.id).await?;

        assert_eq!(job.guild_instance_id, guild.id);
        assert!(job.is_active);
        assert!(job.category_id.is_none());
        assert_eq!(job.schedule, "0 8 * * *");

        Ok(())
    }

    #[tokio::test]
    async fn creates_job_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let guild = create_guild(db).await?;
        let job = ScheduledJobFactory::new(db, guild.id)
            .name("weekly-raid")
            .schedule("30 20 * * 5")
            .is_active(false)
            .category_id(Some(4200))
            .build()
            .await?;

        assert_eq!(job.name, "weekly-raid");
        assert_eq!(job.schedule, "30 20 * * 5");
        assert!(!job.is_active);
        assert_eq!(job.category_id, Some(4200));

        Ok(())
    }
}
