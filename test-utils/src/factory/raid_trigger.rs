//! Raid trigger factory for creating test raid extension rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test raid trigger events with customizable fields.
///
/// Defaults: a unique `Raid {id}` title, a unique channel id, and no
/// description, time, cap or template.
pub struct RaidTriggerFactory<'a> {
    db: &'a DatabaseConnection,
    scheduled_job_id: i32,
    title: String,
    description: Option<String>,
    raid_time: Option<String>,
    participant_cap: Option<i32>,
    channel_id: i64,
    template_id: Option<String>,
}

impl<'a> RaidTriggerFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, scheduled_job_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            scheduled_job_id,
            title: format!("Raid {}", id),
            description: None,
            raid_time: None,
            participant_cap: None,
            channel_id: 200_000 + id as i64,
            template_id: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn raid_time(mut self, raid_time: Option<String>) -> Self {
        self.raid_time = raid_time;
        self
    }

    pub fn participant_cap(mut self, participant_cap: Option<i32>) -> Self {
        self.participant_cap = participant_cap;
        self
    }

    pub fn channel_id(mut self, channel_id: i64) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub fn template_id(mut self, template_id: Option<String>) -> Self {
        self.template_id = template_id;
        self
    }

    pub async fn build(self) -> Result<entity::raid_trigger_event::Model, DbErr> {
        entity::raid_trigger_event::ActiveModel {
            scheduled_job_id: ActiveValue::Set(self.scheduled_job_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            raid_time: ActiveValue::Set(self.raid_time),
            participant_cap: ActiveValue::Set(self.participant_cap),
            channel_id: ActiveValue::Set(self.channel_id),
            template_id: ActiveValue::Set(self.template_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a raid trigger with default values for the given job.
pub async fn create_raid_trigger(
    db: &DatabaseConnection,
    scheduled_job_id: i32,
) -> Result<entity::raid_trigger_event::Model, DbErr> {
    RaidTriggerFactory::new(db, scheduled_job_id).build().await
}
