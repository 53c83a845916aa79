use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000002_create_scheduled_job_table::ScheduledJob;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RaidTriggerEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(RaidTriggerEvent::Id))
                    .col(integer_uniq(RaidTriggerEvent::ScheduledJobId))
                    .col(string(RaidTriggerEvent::Title))
                    .col(text_null(RaidTriggerEvent::Description))
                    .col(string_null(RaidTriggerEvent::RaidTime))
                    .col(integer_null(RaidTriggerEvent::ParticipantCap))
                    .col(big_integer(RaidTriggerEvent::ChannelId))
                    .col(string_null(RaidTriggerEvent::TemplateId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_raid_trigger_event_scheduled_job_id")
                            .from(RaidTriggerEvent::Table, RaidTriggerEvent::ScheduledJobId)
                            .to(ScheduledJob::Table, ScheduledJob::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RaidTriggerEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RaidTriggerEvent {
    Table,
    Id,
    ScheduledJobId,
    Title,
    Description,
    RaidTime,
    ParticipantCap,
    ChannelId,
    TemplateId,
}
