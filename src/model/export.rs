use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::family::FamilyDto;

/// Optional area filters; blank values are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ExportQuery {
    pub rt: Option<String>,
    pub rw: Option<String>,
    pub dusun: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ExportFamilyDto {
    #[serde(flatten)]
    pub family: FamilyDto,
    pub member_count: i64,
    pub completed: bool,
    pub nama_pencacah: Option<String>,
    pub hp_pencacah: Option<String>,
    pub nama_pemberi_jawaban: Option<String>,
    pub hp_pemberi_jawaban: Option<String>,
    pub catatan: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ExportMemberDto {
    pub keluarga_id: String,
    pub rt: String,
    pub rw: String,
    pub dusun: String,
    pub nama_kepala: String,
    pub anggota_ke: i32,
    pub nama: String,
    pub umur: i32,
    pub hubungan: String,
    pub jenis_kelamin: String,
    pub status_perkawinan: String,
    pub pendidikan: String,
    pub kegiatan: String,
    pub memiliki_pekerjaan: String,
    pub status_pekerjaan_diinginkan: Option<String>,
    pub bidang_usaha: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AreaDto {
    pub rt: String,
    pub rw: String,
    pub dusun: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ExportSummaryDto {
    pub total_families: usize,
    pub total_members: usize,
    pub export_date: DateTime<Utc>,
    pub filters: ExportQuery,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ExportDataDto {
    pub families: Vec<ExportFamilyDto>,
    pub members: Vec<ExportMemberDto>,
    #[serde(rename = "filterOptions")]
    pub filter_options: Vec<AreaDto>,
    pub summary: ExportSummaryDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ExportResponseDto {
    pub success: bool,
    pub data: ExportDataDto,
}
