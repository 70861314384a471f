use crate::server::{
    data::completion::SurveyCompletionRepository, model::completion::CompleteSurveyParams,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod upsert;

fn params(keluarga_id: &str, catatan: Option<&str>) -> CompleteSurveyParams {
    CompleteSurveyParams {
        keluarga_id: keluarga_id.to_string(),
        nama_pencacah: "Rina".to_string(),
        hp_pencacah: "081234567890".to_string(),
        nama_pemberi_jawaban: "Budi Santoso".to_string(),
        hp_pemberi_jawaban: "081298765432".to_string(),
        catatan: catatan.map(str::to_string),
    }
}
