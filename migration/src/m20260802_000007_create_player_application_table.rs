use sea_orm_migration::{prelude::*, schema::*};

use super::m20260802_000005_create_application_form_table::ApplicationForm;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerApplication::Id))
                    .col(integer(PlayerApplication::FormId))
                    .col(big_integer(PlayerApplication::UserId))
                    .col(string(PlayerApplication::Status))
                    .col(
                        timestamp(PlayerApplication::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_application_form_id")
                            .from(PlayerApplication::Table, PlayerApplication::FormId)
                            .to(ApplicationForm::Table, ApplicationForm::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_application_form_user")
                    .table(PlayerApplication::Table)
                    .col(PlayerApplication::FormId)
                    .col(PlayerApplication::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerApplication::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerApplication {
    Table,
    Id,
    FormId,
    UserId,
    Status,
    CreatedAt,
}
