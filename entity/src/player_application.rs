use sea_orm::entity::prelude::*;

/// One user's submission against a form; unique per (form, user).
///
/// `status` lifecycle: pending -> approved | rejected | withdrawn.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player_application")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub form_id: i32,
    /// Discord user snowflake of the applicant.
    pub user_id: i64,
    pub status: String,
    pub created_at: DateTimeUtc,
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
