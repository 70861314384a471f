use crate::server::{
    data::family::FamilyRepository,
    model::family::{CreateFamilyParams, FamilyFields, UpdateFamilyOutcome, UpdateFamilyParams},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all_with_progress;
mod get_detail;
mod update;

/// Valid family fields for RT 001 / RW 002 with four residents, two of them adults.
fn fields() -> FamilyFields {
    FamilyFields {
        rt: "001".to_string(),
        rw: "002".to_string(),
        dusun: "Krajan".to_string(),
        nama_kepala: "Budi Santoso".to_string(),
        alamat: "Jalan Mawar 1".to_string(),
        jumlah_anggota: 4,
        jumlah_anggota_15plus: 2,
    }
}
