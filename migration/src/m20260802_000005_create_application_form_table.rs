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
                    .table(ApplicationForm::Table)
                    .if_not_exists()
                    .col(pk_auto(ApplicationForm::Id))
                    .col(integer(ApplicationForm::GuildInstanceId))
                    .col(string(ApplicationForm::Name))
                    .col(text_null(ApplicationForm::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_form_guild_instance_id")
                            .from(ApplicationForm::Table, ApplicationForm::GuildInstanceId)
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
                    .name("idx_application_form_guild_name")
                    .table(ApplicationForm::Table)
                    .col(ApplicationForm::GuildInstanceId)
                    .col(ApplicationForm::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApplicationForm::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApplicationForm {
    Table,
    Id,
    GuildInstanceId,
    Name,
    Description,
}
