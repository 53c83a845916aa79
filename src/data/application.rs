use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::application::ApplicationStatus;

pub struct ApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts a pending application for a (form, user) pair. The caller is
    /// responsible for rejecting duplicates beforehand; the unique index is
    /// the backstop.
    pub async fn create(
        &self,
        form_id: i32,
        user_id: i64,
    ) -> Result<entity::player_application::Model, DbErr> {
        entity::player_application::ActiveModel {
            form_id: ActiveValue::Set(form_id),
            user_id: ActiveValue::Set(user_id),
            status: ActiveValue::Set(ApplicationStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find(
        &self,
        form_id: i32,
        user_id: i64,
    ) -> Result<Option<entity::player_application::Model>, DbErr> {
        entity::prelude::PlayerApplication::find()
            .filter(entity::player_application::Column::FormId.eq(form_id))
            .filter(entity::player_application::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn set_status(
        &self,
        id: i32,
        status: ApplicationStatus,
    ) -> Result<entity::player_application::Model, DbErr> {
        let application = entity::prelude::PlayerApplication::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Application with id {} not found",
                id
            )))?;

        let mut active: entity::player_application::ActiveModel = application.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.update(self.db).await
    }

    /// Stores or replaces the answer for one question of an application.
    pub async fn upsert_answer(
        &self,
        application_id: i32,
        question_id: i32,
        value: &str,
    ) -> Result<entity::application_answer::Model, DbErr> {
        let existing = entity::prelude::ApplicationAnswer::find()
            .filter(entity::application_answer::Column::ApplicationId.eq(application_id))
            .filter(entity::application_answer::Column::QuestionId.eq(question_id))
            .one(self.db)
            .await?;

        if let Some(existing) = existing {
            let mut active: entity::application_answer::ActiveModel = existing.into();
            active.value = ActiveValue::Set(value.to_string());
            return active.update(self.db).await;
        }

        entity::application_answer::ActiveModel {
            application_id: ActiveValue::Set(application_id),
            question_id: ActiveValue::Set(question_id),
            value: ActiveValue::Set(value.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn answers(
        &self,
        application_id: i32,
    ) -> Result<Vec<entity::application_answer::Model>, DbErr> {
        entity::prelude::ApplicationAnswer::find()
            .filter(entity::application_answer::Column::ApplicationId.eq(application_id))
            .all(self.db)
            .await
    }

    /// Lists applications for a form, optionally filtered by review status.
    pub async fn list_by_form(
        &self,
        form_id: i32,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<entity::player_application::Model>, DbErr> {
        let mut query = entity::prelude::PlayerApplication::find()
            .filter(entity::player_application::Column::FormId.eq(form_id));

        if let Some(status) = status {
            query = query.filter(entity::player_application::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_asc(entity::player_application::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
