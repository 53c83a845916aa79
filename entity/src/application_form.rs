use sea_orm::entity::prelude::*;

/// A membership application form owned by one guild instance.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "application_form")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_instance_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
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
    #[sea_orm(has_many = "super::form_question::Entity")]
    FormQuestion,
    #[sea_orm(has_many = "super::player_application::Entity")]
    PlayerApplication,
}

impl Related<super::guild_instance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildInstance.def()
    }
}

impl Related<super::form_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormQuestion.def()
    }
}

impl Related<super::player_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
