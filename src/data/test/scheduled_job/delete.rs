use super::*;

/// Tests deleting a raid job.
///
/// Expected: the job row and its raid-trigger extension row are both gone.
#[tokio::test]
async fn deletes_job_and_raid_extension() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_instance::create_guild(db).await?;
    let job = factory::scheduled_job::create_job(db, guild.id).await?;
    let raid = factory::raid_trigger::create_raid_trigger(db, job.id).await?;

    let repo = ScheduledJobRepository::new(db);
    repo.delete(job.id).await?;

    let stored_job = entity::prelude::ScheduledJob::find_by_id(job.id).one(db).await?;
    assert!(stored_job.is_none());

    let stored_raid = entity::prelude::RaidTriggerEvent::find_by_id(raid.id).one(db).await?;
    assert!(stored_raid.is_none());

    Ok(())
}

/// Tests that deleting one job leaves sibling jobs untouched.
///
/// Expected: only the targeted job disappears.
#[tokio::test]
async fn leaves_other_jobs_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_instance::create_guild(db).await?;
    let doomed = factory::scheduled_job::create_job(db, guild.id).await?;
    let survivor = factory::scheduled_job::create_job(db, guild.id).await?;

    let repo = ScheduledJobRepository::new(db);
    repo.delete(doomed.id).await?;

    let remaining = entity::prelude::ScheduledJob::find()
        .filter(entity::scheduled_job::Column::GuildInstanceId.eq(guild.id))
        .all(db)
        .await?;

    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, survivor.id);

    Ok(())
}
