use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Member form submitted once per household member aged 15 or older.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct MemberFormDto {
    pub family_id: Option<String>,
    pub nama: Option<String>,
    pub umur: Option<i32>,
    pub hubungan: Option<String>,
    pub jenis_kelamin: Option<String>,
    pub status_perkawinan: Option<String>,
    pub pendidikan: Option<String>,
    pub kegiatan: Option<String>,
    pub memiliki_pekerjaan: Option<String>,
    pub status_pekerjaan_diinginkan: Option<String>,
    pub bidang_usaha: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MemberDto {
    pub id: i32,
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
    pub created_at: DateTime<Utc>,
}

/// Result of appending a member.
///
/// Either `continue_next_member` and `remaining` are set, or `redirect_url` points
/// at the final step once every declared member has been recorded.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct MemberSubmitResponseDto {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_next_member: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}
