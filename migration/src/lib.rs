pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_guild_instance_table;
mod m20260801_000002_create_scheduled_job_table;
mod m20260801_000003_create_raid_trigger_event_table;
mod m20260801_000004_create_welcome_message_table;
mod m20260802_000005_create_application_form_table;
mod m20260802_000006_create_form_question_table;
mod m20260802_000007_create_player_application_table;
mod m20260802_000008_create_application_answer_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_guild_instance_table::Migration),
            Box::new(m20260801_000002_create_scheduled_job_table::Migration),
            Box::new(m20260801_000003_create_raid_trigger_event_table::Migration),
            Box::new(m20260801_000004_create_welcome_message_table::Migration),
            Box::new(m20260802_000005_create_application_form_table::Migration),
            Box::new(m20260802_000006_create_form_question_table::Migration),
            Box::new(m20260802_000007_create_player_application_table::Migration),
            Box::new(m20260802_000008_create_application_answer_table::Migration),
        ]
    }
}
