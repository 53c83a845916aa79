use sea_orm::entity::prelude::*;

/// One-to-one extension of a scheduled job whose firing posts a raid-creation
/// command string into a channel. Destroyed with its job (cascade).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "raid_trigger_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub scheduled_job_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// "HH:MM"; the composer falls back to 20:00 when unset.
    pub raid_time: Option<String>,
    pub participant_cap: Option<i32>,
    /// Target text channel snowflake the command string is posted into.
    pub channel_id: i64,
    pub template_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::scheduled_job::Entity",
        from = "Column::ScheduledJobId",
        to = "super::scheduled_job::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ScheduledJob,
}

impl Related<super::scheduled_job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduledJob.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
