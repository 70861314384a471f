use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Family::Table)
                    .if_not_exists()
                    .col(pk_auto(Family::Id))
                    .col(string_uniq(Family::KeluargaId))
                    .col(string(Family::Rt))
                    .col(string(Family::Rw))
                    .col(string(Family::Dusun))
                    .col(string(Family::NamaKepala))
                    .col(text(Family::Alamat))
                    .col(integer(Family::JumlahAnggota))
                    .col(integer(Family::JumlahAnggota15plus))
                    .col(
                        timestamp_with_time_zone(Family::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Family::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_family_area")
                    .table(Family::Table)
                    .col(Family::Rt)
                    .col(Family::Rw)
                    .col(Family::Dusun)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Family::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Family {
    Table,
    Id,
    KeluargaId,
    Rt,
    Rw,
    Dusun,
    NamaKepala,
    Alamat,
    JumlahAnggota,
    #[sea_orm(iden = "jumlah_anggota_15plus")]
    JumlahAnggota15plus,
    CreatedAt,
    UpdatedAt,
}
