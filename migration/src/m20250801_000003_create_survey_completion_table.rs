use sea_orm_migration::{prelude::*, schema::*};

use super::m20250801_000001_create_family_table::Family;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SurveyCompletion::Table)
                    .if_not_exists()
                    .col(pk_auto(SurveyCompletion::Id))
                    .col(integer_uniq(SurveyCompletion::FamilyId))
                    .col(string(SurveyCompletion::NamaPencacah))
                    .col(string(SurveyCompletion::HpPencacah))
                    .col(string(SurveyCompletion::NamaPemberiJawaban))
                    .col(string(SurveyCompletion::HpPemberiJawaban))
                    .col(text_null(SurveyCompletion::Catatan))
                    .col(
                        timestamp_with_time_zone(SurveyCompletion::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(SurveyCompletion::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_survey_completion_family_id")
                            .from(SurveyCompletion::Table, SurveyCompletion::FamilyId)
                            .to(Family::Table, Family::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SurveyCompletion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SurveyCompletion {
    Table,
    Id,
    FamilyId,
    NamaPencacah,
    HpPencacah,
    NamaPemberiJawaban,
    HpPemberiJawaban,
    Catatan,
    CreatedAt,
    UpdatedAt,
}
