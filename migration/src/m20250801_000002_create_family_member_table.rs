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
                    .table(FamilyMember::Table)
                    .if_not_exists()
                    .col(pk_auto(FamilyMember::Id))
                    .col(integer(FamilyMember::FamilyId))
                    .col(integer(FamilyMember::AnggotaKe))
                    .col(string(FamilyMember::Nama))
                    .col(integer(FamilyMember::Umur))
                    .col(string(FamilyMember::Hubungan))
                    .col(string(FamilyMember::JenisKelamin))
                    .col(string(FamilyMember::StatusPerkawinan))
                    .col(string(FamilyMember::Pendidikan))
                    .col(string(FamilyMember::Kegiatan))
                    .col(string(FamilyMember::MemilikiPekerjaan))
                    .col(string_null(FamilyMember::StatusPekerjaanDiinginkan))
                    .col(string_null(FamilyMember::BidangUsaha))
                    .col(
                        timestamp_with_time_zone(FamilyMember::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_family_member_family_id")
                            .from(FamilyMember::Table, FamilyMember::FamilyId)
                            .to(Family::Table, Family::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_family_member_sequence_unique")
                            .col(FamilyMember::FamilyId)
                            .col(FamilyMember::AnggotaKe),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FamilyMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FamilyMember {
    Table,
    Id,
    FamilyId,
    AnggotaKe,
    Nama,
    Umur,
    Hubungan,
    JenisKelamin,
    StatusPerkawinan,
    Pendidikan,
    Kegiatan,
    MemilikiPekerjaan,
    StatusPekerjaanDiinginkan,
    BidangUsaha,
    CreatedAt,
}
