use sea_orm::entity::prelude::*;

/// An ordered question on an application form.
///
/// `question_type` is one of `text`, `select`, `checkbox`, `number`;
/// `options` is a comma-separated list and required for select/checkbox.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "form_question")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub form_id: i32,
    /// 1-based order within the form.
    pub position: i32,
    pub label: String,
    pub question_type: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub options: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::application_form::Entity",
        from = "Column::FormId",
        to = "super::application_form::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ApplicationForm,
    #[sea_orm(has_many = "super::application_answer::Entity")]
    ApplicationAnswer,
}

impl Related<super::application_form::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationForm.def()
    }
}

impl Related<super::application_answer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationAnswer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
