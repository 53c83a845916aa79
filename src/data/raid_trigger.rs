use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::raid::CreateRaidTriggerParams;

pub struct RaidTriggerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RaidTriggerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches a raid-trigger extension row to a scheduled job.
    pub async fn create(
        &self,
        params: CreateRaidTriggerParams,
    ) -> Result<entity::raid_trigger_event::Model, DbErr> {
        entity::raid_trigger_event::ActiveModel {
            scheduled_job_id: ActiveValue::Set(params.scheduled_job_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            raid_time: ActiveValue::Set(params.raid_time),
            participant_cap: ActiveValue::Set(params.participant_cap),
            channel_id: ActiveValue::Set(params.channel_id),
            template_id: ActiveValue::Set(params.template_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Looks up the extension row for a job id, used by the action
    /// dispatcher when the job carries no category reference.
    pub async fn get_by_job_id(
        &self,
        scheduled_job_id: i32,
    ) -> Result<Option<entity::raid_trigger_event::Model>, DbErr> {
        entity::prelude::RaidTriggerEvent::find()
            .filter(entity::raid_trigger_event::Column::ScheduledJobId.eq(scheduled_job_id))
            .one(self.db)
            .await
    }
}
