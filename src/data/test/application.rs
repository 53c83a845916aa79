use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::data::application::ApplicationRepository;
use crate::model::application::ApplicationStatus;

/// Tests starting an application.
///
/// Expected: the row is created pending and found by (form, user).
#[tokio::test]
async fn creates_pending_application() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_instance::create_guild(db).await?;
    let form = factory::application_form::create_form(db, guild.id).await?;

    let repo = ApplicationRepository::new(db);
    let application = repo.create(form.id, 777).await?;

    assert_eq!(application.status, "pending");
    assert_eq!(application.user_id, 777);

    let found = repo.find(form.id, 777).await?;
    assert_eq!(found.map(|a| a.id), Some(application.id));
    assert!(repo.find(form.id, 778).await?.is_none());

    Ok(())
}

/// Tests the review status transitions at the storage level.
///
/// Expected: the status column follows set_status.
#[tokio::test]
async fn sets_review_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_instance::create_guild(db).await?;
    let form = factory::application_form::create_form(db, guild.id).await?;
    let application = factory::player_application::create_application(db, form.id).await?;

    let repo = ApplicationRepository::new(db);
    let approved = repo.set_status(application.id, ApplicationStatus::Approved).await?;

    assert_eq!(approved.status, "approved");

    let result = repo.set_status(999, ApplicationStatus::Rejected).await;
    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests answer upserts.
///
/// Expected: answering the same question twice replaces the value instead
/// of adding a second row.
#[tokio::test]
async fn upsert_answer_replaces_existing_value() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_instance::create_guild(db).await?;
    let form = factory::application_form::create_form(db, guild.id).await?;
    let question = factory::form_question::create_question(db, form.id, 1).await?;
    let application = factory::player_application::create_application(db, form.id).await?;

    let repo = ApplicationRepository::new(db);
    repo.upsert_answer(application.id, question.id, "first").await?;
    repo.upsert_answer(application.id, question.id, "second").await?;

    let answers = repo.answers(application.id).await?;
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].value, "second");

    Ok(())
}

/// Tests listing with and without a status filter.
///
/// Expected: the filter narrows to matching rows only.
#[tokio::test]
async fn lists_applications_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_instance::create_guild(db).await?;
    let form = factory::application_form::create_form(db, guild.id).await?;

    factory::player_application::create_application(db, form.id).await?;
    factory::player_application::PlayerApplicationFactory::new(db, form.id)
        .status("approved")
        .build()
        .await?;

    let repo = ApplicationRepository::new(db);

    assert_eq!(repo.list_by_form(form.id, None).await?.len(), 2);

    let pending = repo
        .list_by_form(form.id, Some(ApplicationStatus::Pending))
        .await?;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].status, "pending");

    let rejected = repo
        .list_by_form(form.id, Some(ApplicationStatus::Rejected))
        .await?;
    assert!(rejected.is_empty());

    Ok(())
}
