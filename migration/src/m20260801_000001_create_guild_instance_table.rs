use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildInstance::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildInstance::Id))
                    .col(big_integer_uniq(GuildInstance::GuildId))
                    .col(string(GuildInstance::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildInstance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildInstance {
    Table,
    Id,
    GuildId,
    Name,
}
