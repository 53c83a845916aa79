use sea_orm::entity::prelude::*;

/// One row per Discord guild the bot has been used in, created lazily on
/// first command use and never destroyed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_instance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord guild snowflake.
    #[sea_orm(unique)]
    pub guild_id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::scheduled_job::Entity")]
    ScheduledJob,
    #[sea_orm(has_one = "super::welcome_message::Entity")]
    WelcomeMessage,
    #[sea_orm(has_many = "super::application_form::Entity")]
    ApplicationForm,
}

impl Related<super::scheduled_job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduledJob.def()
    }
}

impl Related<super::welcome_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WelcomeMessage.def()
    }
}

impl Related<super::application_form::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationForm.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
