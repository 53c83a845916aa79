use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::data::raid_trigger::RaidTriggerRepository;
use crate::model::raid::CreateRaidTriggerParams;

/// Tests attaching an extension row with all optional fields set.
///
/// Expected: Ok with every field persisted.
#[tokio::test]
async fn creates_full_extension_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_instance::create_guild(db).await?;
    let job = factory::scheduled_job::create_job(db, guild.id).await?;

    let repo = RaidTriggerRepository::new(db);
    let raid = repo
        .create(CreateRaidTriggerParams {
            scheduled_job_id: job.id,
            title: "Clan Boss".to_string(),
            description: Some("Bring potions".to_string()),
            raid_time: Some("19:30".to_string()),
            participant_cap: Some(25),
            channel_id: 9000,
            template_id: Some("7".to_string()),
        })
        .await?;

    assert_eq!(raid.scheduled_job_id, job.id);
    assert_eq!(raid.title, "Clan Boss");
    assert_eq!(raid.raid_time, Some("19:30".to_string()));
    assert_eq!(raid.participant_cap, Some(25));
    assert_eq!(raid.channel_id, 9000);
    assert_eq!(raid.template_id, Some("7".to_string()));

    Ok(())
}

/// Tests dispatcher lookup by job id.
///
/// Expected: the extension row is found for its own job and absent for a
/// job without one.
#[tokio::test]
async fn finds_extension_by_job_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_instance::create_guild(db).await?;
    let raid_job = factory::scheduled_job::create_job(db, guild.id).await?;
    let plain_job = factory::scheduled_job::create_job(db, guild.id).await?;
    let raid = factory::raid_trigger::create_raid_trigger(db, raid_job.id).await?;

    let repo = RaidTriggerRepository::new(db);

    let found = repo.get_by_job_id(raid_job.id).await?;
    assert_eq!(found.map(|r| r.id), Some(raid.id));

    assert!(repo.get_by_job_id(plain_job.id).await?.is_none());

    Ok(())
}
