use sea_orm::entity::prelude::*;

/// A named, schedulable action owned by one guild instance.
///
/// `schedule` holds a 5-field cron expression. `category_id` is set for
/// channel-creation jobs; raid-posting jobs carry a `raid_trigger_event`
/// extension row instead. `description` is free text and may hold serialized
/// channel-name formatting options for channel jobs.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "scheduled_job")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_instance_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub schedule: String,
    pub is_active: bool,
    /// Discord category channel snowflake for channel-creation jobs.
    pub category_id: Option<i64>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guild_instance::Entity",
        from = "Column::GuildInstanceId",
        to = "super::guild_instance::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GuildInstance,
    #[sea_orm(has_one = "super::raid_trigger_event::Entity")]
    RaidTriggerEvent,
}

impl Related<super::guild_instance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildInstance.def()
    }
}

impl Related<super::raid_trigger_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RaidTriggerEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
