use sea_orm::entity::prelude::*;

/// Per-guild welcome message template with placeholder tokens.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "welcome_message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_instance_id: i32,
    #[sea_orm(column_type = "Text")]
    pub template: String,
    pub enabled: bool,
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
}

impl Related<super::guild_instance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildInstance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
