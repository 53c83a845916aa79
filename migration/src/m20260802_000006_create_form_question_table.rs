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
                    .table(FormQuestion::Table)
                    .if_not_exists()
                    .col(pk_auto(FormQuestion::Id))
                    .col(integer(FormQuestion::FormId))
                    .col(integer(FormQuestion::Position))
                    .col(string(FormQuestion::Label))
                    .col(string(FormQuestion::QuestionType))
                    .col(text_null(FormQuestion::Options))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_form_question_form_id")
                            .from(FormQuestion::Table, FormQuestion::FormId)
                            .to(ApplicationForm::Table, ApplicationForm::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FormQuestion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FormQuestion {
    Table,
    Id,
    FormId,
    Position,
    Label,
    QuestionType,
    Options,
}
