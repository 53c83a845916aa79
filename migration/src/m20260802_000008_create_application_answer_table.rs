use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260802_000006_create_form_question_table::FormQuestion,
    m20260802_000007_create_player_application_table::PlayerApplication,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApplicationAnswer::Table)
                    .if_not_exists()
                    .col(pk_auto(ApplicationAnswer::Id))
                    .col(integer(ApplicationAnswer::ApplicationId))
                    .col(integer(ApplicationAnswer::QuestionId))
                    .col(text(ApplicationAnswer::Value))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_answer_application_id")
                            .from(ApplicationAnswer::Table, ApplicationAnswer::ApplicationId)
                            .to(PlayerApplication::Table, PlayerApplication::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_answer_question_id")
                            .from(ApplicationAnswer::Table, ApplicationAnswer::QuestionId)
                            .to(FormQuestion::Table, FormQuestion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_application_answer_application_question")
                    .table(ApplicationAnswer::Table)
                    .col(ApplicationAnswer::ApplicationId)
                    .col(ApplicationAnswer::QuestionId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApplicationAnswer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApplicationAnswer {
    Table,
    Id,
    ApplicationId,
    QuestionId,
    Value,
}
