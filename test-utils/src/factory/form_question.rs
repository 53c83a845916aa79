//! Form question factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test form questions.
///
/// Defaults to a free-text question without options.
pub struct FormQuestionFactory<'a> {
    db: &'a DatabaseConnection,
    form_id: i32,
    position: i32,
    label: String,
    question_type: String,
    options: Option<String>,
}

impl<'a> FormQuestionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, form_id: i32, position: i32) -> Self {
        let id = next_id();
        Self {
            db,
            form_id,
            position,
            label: format!("Question {}", id),
            question_type: "text".to_string(),
            options: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn question_type(mut self, question_type: impl Into<String>) -> Self {
        self.question_type = question_type.into();
        self
    }

    pub fn options(mut self, options: Option<String>) -> Self {
        self.options = options;
        self
    }

    pub async fn build(self) -> Result<entity::form_question::Model, DbErr> {
        entity::form_question::ActiveModel {
            form_id: ActiveValue::Set(self.form_id),
            position: ActiveValue::Set(self.position),
            label: ActiveValue::Set(self.label),
            question_type: ActiveValue::Set(self.question_type),
            options: ActiveValue::Set(self.options),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a text question at the given position.
pub async fn create_question(
    db: &DatabaseConnection,
    form_id: i32,
    position: i32,
) -> Result<entity::form_question::Model, DbErr> {
    FormQuestionFactory::new(db, form_id, position).build().await
}
