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
                    .table(WelcomeMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(WelcomeMessage::Id))
                    .col(integer_uniq(WelcomeMessage::GuildInstanceId))
                    .col(text(WelcomeMessage::Template))
                    .col(boolean(WelcomeMessage::Enabled))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_welcome_message_guild_instance_id")
                            .from(WelcomeMessage::Table, WelcomeMessage::GuildInstanceId)
                            .to(GuildInstance::Table, GuildInstance::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WelcomeMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WelcomeMessage {
    Table,
    Id,
    GuildInstanceId,
    Template,
    Enabled,
}
