use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::data::form::FormRepository;
use crate::model::application::{AddQuestionParams, QuestionType};

/// Tests creating and looking up forms by name within a guild.
///
/// Expected: lookup is scoped to the owning guild.
#[tokio::test]
async fn creates_and_finds_forms_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::guild_instance::create_guild(db).await?;
    let second = factory::guild_instance::create_guild(db).await?;

    let repo = FormRepository::new(db);
    let form = repo.create(first.id, "recruitment", None).await?;

    assert_eq!(form.name, "recruitment");
    assert!(repo.get_by_name(first.id, "recruitment").await?.is_some());
    assert!(repo.get_by_name(second.id, "recruitment").await?.is_none());

    Ok(())
}

/// Tests appending questions.
///
/// Expected: positions are assigned densely in insertion order.
#[tokio::test]
async fn add_question_appends_positions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_instance::create_guild(db).await?;
    let repo = FormRepository::new(db);
    let form = repo.create(guild.id, "recruitment", None).await?;

    let first = repo
        .add_question(AddQuestionParams {
            form_id: form.id,
            label: "Why do you want to join?".to_string(),
            question_type: QuestionType::Text,
            options: None,
        })
        .await?;
    let second = repo
        .add_question(AddQuestionParams {
            form_id: form.id,
            label: "Preferred role".to_string(),
            question_type: QuestionType::Select,
            options: Some("Tank, Healer, DPS".to_string()),
        })
        .await?;

    assert_eq!(first.position, 1);
    assert_eq!(second.position, 2);
    assert_eq!(second.question_type, "select");

    let questions = repo.questions(form.id).await?;
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].id, first.id);
    assert_eq!(questions[1].id, second.id);

    Ok(())
}

/// Tests removing a question from the middle of a form.
///
/// Expected: trailing questions are renumbered to stay densely 1-based.
#[tokio::test]
async fn remove_question_renumbers_trailing_positions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_instance::create_guild(db).await?;
    let repo = FormRepository::new(db);
    let form = repo.create(guild.id, "recruitment", None).await?;

    factory::form_question::create_question(db, form.id, 1).await?;
    let middle = factory::form_question::create_question(db, form.id, 2).await?;
    let last = factory::form_question::create_question(db, form.id, 3).await?;

    assert!(repo.remove_question(form.id, 2).await?);

    let questions = repo.questions(form.id).await?;
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[1].id, last.id);
    assert_eq!(questions[1].position, 2);
    assert!(questions.iter().all(|question| question.id != middle.id));

    Ok(())
}

/// Tests removing a position that does not exist.
///
/// Expected: Ok(false), nothing changed.
#[tokio::test]
async fn remove_question_reports_missing_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_instance::create_guild(db).await?;
    let repo = FormRepository::new(db);
    let form = repo.create(guild.id, "recruitment", None).await?;
    factory::form_question::create_question(db, form.id, 1).await?;

    assert!(!repo.remove_question(form.id, 5).await?);
    assert_eq!(repo.questions(form.id).await?.len(), 1);

    Ok(())
}

/// Tests deleting a form with questions, applications and answers.
///
/// Expected: every dependent row is gone with the form.
#[tokio::test]
async fn delete_removes_whole_form_tree() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_instance::create_guild(db).await?;
    let repo = FormRepository::new(db);
    let form = repo.create(guild.id, "recruitment", None).await?;
    let question = factory::form_question::create_question(db, form.id, 1).await?;
    let application = factory::player_application::create_application(db, form.id).await?;

    crate::data::application::ApplicationRepository::new(db)
        .upsert_answer(application.id, question.id, "because")
        .await?;

    repo.delete(form.id).await?;

    assert!(entity::prelude::ApplicationForm::find_by_id(form.id).one(db).await?.is_none());
    assert!(entity::prelude::FormQuestion::find_by_id(question.id).one(db).await?.is_none());
    assert!(entity::prelude::PlayerApplication::find_by_id(application.id).one(db).await?.is_none());
    assert!(entity::prelude::ApplicationAnswer::find().one(db).await?.is_none());

    Ok(())
}
