use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::data::guild::GuildRepository;
use entity::prelude::GuildInstance;

/// Tests lazy creation on first use.
///
/// Expected: a new row with the given snowflake and name.
#[tokio::test]
async fn creates_instance_on_first_use() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(GuildInstance).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let instance = repo.get_or_create(4242, "The Guild").await?;

    assert_eq!(instance.guild_id, 4242);
    assert_eq!(instance.name, "The Guild");

    Ok(())
}

/// Tests that repeated use returns the same row.
///
/// Expected: same id on every call.
#[tokio::test]
async fn returns_existing_instance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(GuildInstance).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let first = repo.get_or_create(4242, "The Guild").await?;
    let second = repo.get_or_create(4242, "The Guild").await?;

    assert_eq!(first.id, second.id);

    Ok(())
}

/// Tests that a changed display name is refreshed on lookup.
///
/// Expected: the stored name follows the current Discord guild name.
#[tokio::test]
async fn refreshes_changed_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(GuildInstance).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let original = repo.get_or_create(4242, "Old Name").await?;
    let renamed = repo.get_or_create(4242, "New Name").await?;

    assert_eq!(original.id, renamed.id);
    assert_eq!(renamed.name, "New Name");

    Ok(())
}

/// Tests that update_name never creates rows.
///
/// Expected: unknown guilds are ignored; instances appear only on first
/// command use.
#[tokio::test]
async fn update_name_ignores_unknown_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(GuildInstance).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    repo.update_name(4242, "Whatever").await?;

    assert!(repo.find_by_guild_id(4242).await?.is_none());

    let known = factory::guild_instance::create_guild(db).await?;
    repo.update_name(known.guild_id, "Renamed").await?;

    let stored = repo.find_by_guild_id(known.guild_id).await?.unwrap();
    assert_eq!(stored.name, "Renamed");

    Ok(())
}
