use super::*;

/// Tests that the registry query returns only active jobs, across guilds.
///
/// Expected: inactive rows are filtered out, results ordered by id.
#[tokio::test]
async fn returns_only_active_jobs_across_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first_guild = factory::guild_instance::create_guild(db).await?;
    let second_guild = factory::guild_instance::create_guild(db).await?;

    let active_one = factory::scheduled_job::create_job(db, first_guild.id).await?;
    factory::scheduled_job::ScheduledJobFactory::new(db, first_guild.id)
        .is_active(false)
        .build()
        .await?;
    let active_two = factory::scheduled_job::create_job(db, second_guild.id).await?;

    let repo = ScheduledJobRepository::new(db);
    let jobs = repo.get_all_active().await?;

    let ids: Vec<i32> = jobs.iter().map(|job| job.id).collect();
    assert_eq!(ids, vec![active_one.id, active_two.id]);
    assert!(jobs.iter().all(|job| job.is_active));

    Ok(())
}

/// Tests the query against an empty table.
///
/// Expected: Ok with an empty result.
#[tokio::test]
async fn returns_empty_when_no_jobs_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScheduledJobRepository::new(db);

    assert!(repo.get_all_active().await?.is_empty());

    Ok(())
}
