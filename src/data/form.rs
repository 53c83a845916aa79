use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::application::AddQuestionParams;

pub struct FormRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new application form for a guild.
    pub async fn create(
        &self,
        guild_instance_id: i32,
        name: &str,
        description: Option<String>,
    ) -> Result<entity::application_form::Model, DbErr> {
        entity::application_form::ActiveModel {
            guild_instance_id: ActiveValue::Set(guild_instance_id),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_name(
        &self,
        guild_instance_id: i32,
        name: &str,
    ) -> Result<Option<entity::application_form::Model>, DbErr> {
        entity::prelude::ApplicationForm::find()
            .filter(entity::application_form::Column::GuildInstanceId.eq(guild_instance_id))
            .filter(entity::application_form::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn get_all(
        &self,
        guild_instance_id: i32,
    ) -> Result<Vec<entity::application_form::Model>, DbErr> {
        entity::prelude::ApplicationForm::find()
            .filter(entity::application_form::Column::GuildInstanceId.eq(guild_instance_id))
            .order_by_asc(entity::application_form::Column::Name)
            .all(self.db)
            .await
    }

    /// Deletes a form together with its questions, applications and answers.
    pub async fn delete(&self, form_id: i32) -> Result<(), DbErr> {
        let applications = entity::prelude::PlayerApplication::find()
            .filter(entity::player_application::Column::FormId.eq(form_id))
            .all(self.db)
            .await?;

        for application in &applications {
            entity::prelude::ApplicationAnswer::delete_many()
                .filter(entity::application_answer::Column::ApplicationId.eq(application.id))
                .exec(self.db)
                .await?;
        }

        entity::prelude::PlayerApplication::delete_many()
            .filter(entity::player_application::Column::FormId.eq(form_id))
            .exec(self.db)
            .await?;

        entity::prelude::FormQuestion::delete_many()
            .filter(entity::form_question::Column::FormId.eq(form_id))
            .exec(self.db)
            .await?;

        entity::prelude::ApplicationForm::delete_by_id(form_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Appends a question at the next free position of the form.
    pub async fn add_question(
        &self,
        params: AddQuestionParams,
    ) -> Result<entity::form_question::Model, DbErr> {
        let count = entity::prelude::FormQuestion::find()
            .filter(entity::form_question::Column::FormId.eq(params.form_id))
            .count(self.db)
            .await?;

        entity::form_question::ActiveModel {
            form_id: ActiveValue::Set(params.form_id),
            position: ActiveValue::Set(count as i32 + 1),
            label: ActiveValue::Set(params.label),
            question_type: ActiveValue::Set(params.question_type.as_str().to_string()),
            options: ActiveValue::Set(params.options),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Removes the question at `position`, closing the numbering gap so the
    /// remaining questions stay densely 1-based.
    pub async fn remove_question(&self, form_id: i32, position: i32) -> Result<bool, DbErr> {
        let Some(question) = self.question_at(form_id, position).await? else {
            return Ok(false);
        };

        entity::prelude::ApplicationAnswer::delete_many()
            .filter(entity::application_answer::Column::QuestionId.eq(question.id))
            .exec(self.db)
            .await?;

        entity::prelude::FormQuestion::delete_by_id(question.id)
            .exec(self.db)
            .await?;

        let trailing = entity::prelude::FormQuestion::find()
            .filter(entity::form_question::Column::FormId.eq(form_id))
            .filter(entity::form_question::Column::Position.gt(position))
            .order_by_asc(entity::form_question::Column::Position)
            .all(self.db)
            .await?;

        for question in trailing {
            let new_position = question.position - 1;
            let mut active: entity::form_question::ActiveModel = question.into();
            active.position = ActiveValue::Set(new_position);
            active.update(self.db).await?;
        }

        Ok(true)
    }

    /// Gets all questions of a form in display order.
    pub async fn questions(
        &self,
        form_id: i32,
    ) -> Result<Vec<entity::form_question::Model>, DbErr> {
        entity::prelude::FormQuestion::find()
            .filter(entity::form_question::Column::FormId.eq(form_id))
            .order_by_asc(entity::form_question::Column::Position)
            .all(self.db)
            .await
    }

    pub async fn question_at(
        &self,
        form_id: i32,
        position: i32,
    ) -> Result<Option<entity::form_question::Model>, DbErr> {
        entity::prelude::FormQuestion::find()
            .filter(entity::form_question::Column::FormId.eq(form_id))
            .filter(entity::form_question::Column::Position.eq(position))
            .one(self.db)
            .await
    }
}
