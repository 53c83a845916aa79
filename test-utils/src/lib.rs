//! Guildkeeper Test Utils
//!
//! Shared testing utilities for building unit and integration tests against
//! the guildkeeper schema. This crate offers a builder pattern for creating
//! test contexts with in-memory SQLite databases and customizable table
//! schemas, plus factories for creating test entities with sensible
//! defaults.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database
//! tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_job_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let guild = factory::guild_instance::create_guild(db).await?;
//!     let job = factory::scheduled_job::create_job(db, guild.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
