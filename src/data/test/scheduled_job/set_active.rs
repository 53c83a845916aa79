use super::*;

/// Tests flipping the active flag in both directions.
///
/// Expected: the flag is persisted; nothing else changes.
#[tokio::test]
async fn flips_and_persists_the_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_instance::create_guild(db).await?;
    let job = factory::scheduled_job::create_job(db, guild.id).await?;

    let repo = ScheduledJobRepository::new(db);

    let deactivated = repo.set_active(job.id, false).await?;
    assert!(!deactivated.is_active);
    assert_eq!(deactivated.schedule, job.schedule);

    let stored = entity::prelude::ScheduledJob::find_by_id(job.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.is_active);

    let reactivated = repo.set_active(job.id, true).await?;
    assert!(reactivated.is_active);

    Ok(())
}

/// Tests toggling a job that does not exist.
///
/// Expected: Err(RecordNotFound).
#[tokio::test]
async fn errors_for_unknown_job() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScheduledJobRepository::new(db);
    let result = repo.set_active(999, false).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
