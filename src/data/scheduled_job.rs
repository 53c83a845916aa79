use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::job::CreateScheduledJobParams;

pub struct ScheduledJobRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduledJobRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new scheduled job. Active on creation.
    pub async fn create(
        &self,
        params: CreateScheduledJobParams,
    ) -> Result<entity::scheduled_job::Model, DbErr> {
        entity::scheduled_job::ActiveModel {
            guild_instance_id: ActiveValue::Set(params.guild_instance_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            schedule: ActiveValue::Set(params.schedule),
            is_active: ActiveValue::Set(true),
            category_id: ActiveValue::Set(params.category_id),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a job by name within a guild instance.
    pub async fn get_by_name(
        &self,
        guild_instance_id: i32,
        name: &str,
    ) -> Result<Option<entity::scheduled_job::Model>, DbErr> {
        entity::prelude::ScheduledJob::find()
            .filter(entity::scheduled_job::Column::GuildInstanceId.eq(guild_instance_id))
            .filter(entity::scheduled_job::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets all jobs for a guild instance ordered by name.
    pub async fn get_by_guild(
        &self,
        guild_instance_id: i32,
    ) -> Result<Vec<entity::scheduled_job::Model>, DbErr> {
        entity::prelude::ScheduledJob::find()
            .filter(entity::scheduled_job::Column::GuildInstanceId.eq(guild_instance_id))
            .order_by_asc(entity::scheduled_job::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets every job flagged active, across all guilds. This is the query
    /// the trigger registry re-materializes from.
    pub async fn get_all_active(&self) -> Result<Vec<entity::scheduled_job::Model>, DbErr> {
        entity::prelude::ScheduledJob::find()
            .filter(entity::scheduled_job::Column::IsActive.eq(true))
            .order_by_asc(entity::scheduled_job::Column::Id)
            .all(self.db)
            .await
    }

    /// Flips the active flag. The change only affects firing behavior at the
    /// next registry refresh.
    pub async fn set_active(
        &self,
        id: i32,
        is_active: bool,
    ) -> Result<entity::scheduled_job::Model, DbErr> {
        let job = entity::prelude::ScheduledJob::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Scheduled job with id {} not found",
                id
            )))?;

        let mut active: entity::scheduled_job::ActiveModel = job.into();
        active.is_active = ActiveValue::Set(is_active);
        active.update(self.db).await
    }

    /// Deletes a job and its raid-trigger extension row, if any.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::RaidTriggerEvent::delete_many()
            .filter(entity::raid_trigger_event::Column::ScheduledJobId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::ScheduledJob::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether a job with this name already exists in the guild.
    pub async fn exists_in_guild(
        &self,
        guild_instance_id: i32,
        name: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::ScheduledJob::find()
            .filter(entity::scheduled_job::Column::GuildInstanceId.eq(guild_instance_id))
            .filter(entity::scheduled_job::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
