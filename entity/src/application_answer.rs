use sea_orm::entity::prelude::*;

/// One answer to one question within an application.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "application_answer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub application_id: i32,
    pub question_id: i32,
    #[sea_orm(column_type = "Text")]
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player_application::Entity",
        from = "Column::ApplicationId",
        to = "super::player_application::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PlayerApplication,
    #[sea_orm(
        belongs_to = "super::form_question::Entity",
        from = "Column::QuestionId",
        to = "super::form_question::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FormQuestion,
}

impl Related<super::player_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerApplication.def()
    }
}

impl Related<super::form_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormQuestion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
