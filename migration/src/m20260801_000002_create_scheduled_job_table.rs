use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_guild_instance_table::GuildInstance;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScheduledJob::Table)
                    .if_not_exists()
                    .col(pk_auto(ScheduledJob::Id))
                    .col(integer(ScheduledJob::GuildInstanceId))
                    .col(string(ScheduledJob::Name))
                    .col(text_null(ScheduledJob::Description))
                    .col(string(ScheduledJob::Schedule))
                    .col(boolean(ScheduledJob::IsActive))
                    .col(big_integer_null(ScheduledJob::CategoryId))
                    .col(
                        timestamp(ScheduledJob::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scheduled_job_guild_instance_id")
                            .from(ScheduledJob::Table, ScheduledJob::GuildInstanceId)
                            .to(GuildInstance::Table, GuildInstance::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_scheduled_job_guild_name")
                    .table(ScheduledJob::Table)
                    .col(ScheduledJob::GuildInstanceId)
                    .col(ScheduledJob::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScheduledJob::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ScheduledJob {
    Table,
    Id,
    GuildInstanceId,
    Name,
    Description,
    Schedule,
    IsActive,
    CategoryId,
    CreatedAt,
}
