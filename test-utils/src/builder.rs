use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Each `with_table` call generates a CREATE TABLE statement from a SeaORM
/// entity; `build()` connects to an in-memory SQLite database and executes
/// them in order. Tables should be added in dependency order (tables with
/// foreign keys after their referenced tables).
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{GuildInstance, ScheduledJob};
///
/// let test = TestBuilder::new()
///     .with_table(GuildInstance)
///     .with_table(ScheduledJob)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for scheduler operations: GuildInstance,
    /// ScheduledJob and RaidTriggerEvent.
    pub fn with_scheduler_tables(self) -> Self {
        self.with_table(GuildInstance)
            .with_table(ScheduledJob)
            .with_table(RaidTriggerEvent)
    }

    /// Adds all tables required for welcome message operations.
    pub fn with_welcome_tables(self) -> Self {
        self.with_table(GuildInstance).with_table(WelcomeMessage)
    }

    /// Adds all tables required for application form operations:
    /// GuildInstance, ApplicationForm, FormQuestion, PlayerApplication and
    /// ApplicationAnswer.
    pub fn with_application_tables(self) -> Self {
        self.with_table(GuildInstance)
            .with_table(ApplicationForm)
            .with_table(FormQuestion)
            .with_table(PlayerApplication)
            .with_table(ApplicationAnswer)
    }

    /// Builds and initializes the test context with configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
