use super::*;

/// Tests creating a channel job with formatting options in the description.
///
/// Expected: Ok with the job active on creation and all fields persisted.
#[tokio::test]
async fn creates_active_channel_job() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_instance::create_guild(db).await?;

    let repo = ScheduledJobRepository::new(db);
    let job = repo
        .create(CreateScheduledJobParams {
            guild_instance_id: guild.id,
            name: "raid".to_string(),
            description: Some(r#"{"date_format":"yyyy-MM-dd"}"#.to_string()),
            schedule: "0 8 * * *".to_string(),
            category_id: Some(4200),
        })
        .await?;

    assert!(job.is_active);
    assert_eq!(job.name, "raid");
    assert_eq!(job.schedule, "0 8 * * *");
    assert_eq!(job.category_id, Some(4200));

    let stored = entity::prelude::ScheduledJob::find_by_id(job.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests creating a raid job without a category reference.
///
/// Expected: Ok with no category stored.
#[tokio::test]
async fn creates_job_without_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_instance::create_guild(db).await?;

    let repo = ScheduledJobRepository::new(db);
    let job = repo
        .create(CreateScheduledJobParams {
            guild_instance_id: guild.id,
            name: "weekly".to_string(),
            description: None,
            schedule: "30 20 * * 5".to_string(),
            category_id: None,
        })
        .await?;

    assert!(job.category_id.is_none());
    assert!(job.description.is_none());

    Ok(())
}

/// Tests that name uniqueness checks are scoped to the guild instance.
///
/// Expected: the same name is reported existing only in its own guild.
#[tokio::test]
async fn name_existence_is_scoped_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::guild_instance::create_guild(db).await?;
    let second = factory::guild_instance::create_guild(db).await?;

    let repo = ScheduledJobRepository::new(db);
    factory::scheduled_job::ScheduledJobFactory::new(db, first.id)
        .name("raid")
        .build()
        .await?;

    assert!(repo.exists_in_guild(first.id, "raid").await?);
    assert!(!repo.exists_in_guild(second.id, "raid").await?);
    assert!(!repo.exists_in_guild(first.id, "other").await?);

    Ok(())
}
