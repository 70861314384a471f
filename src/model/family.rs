use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{completion::CompletionDto, member::MemberDto};

/// Family form submitted at the first step of the census workflow.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct FamilyFormDto {
    pub rt: Option<String>,
    pub rw: Option<String>,
    pub dusun: Option<String>,
    pub nama_kepala: Option<String>,
    pub alamat: Option<String>,
    pub jumlah_anggota: Option<i32>,
    pub jumlah_anggota_15plus: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateFamilyDto {
    pub family_id: Option<String>,
    #[serde(flatten)]
    pub form: FamilyFormDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct FamilyIdDto {
    pub family_id: Option<String>,
}

#[derive(Deserialize, Clone, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FamilyIdQuery {
    /// Generated family id, e.g. `KEL-001002-20250801083000`
    pub family_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FamilyDto {
    pub id: i32,
    pub keluarga_id: String,
    pub rt: String,
    pub rw: String,
    pub dusun: String,
    pub nama_kepala: String,
    pub alamat: String,
    pub jumlah_anggota: i32,
    pub jumlah_anggota_15plus: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Family row in the management list with its data-entry progress.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct FamilySummaryDto {
    #[serde(flatten)]
    pub family: FamilyDto,
    pub total_members: i64,
    pub completed: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct FamilyDetailDto {
    #[serde(flatten)]
    pub family: FamilyDto,
    pub members: Vec<MemberDto>,
    pub completion: Option<CompletionDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct FamilySubmitResponseDto {
    pub success: bool,
    pub message: String,
    pub keluarga_id: String,
    pub redirect_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct FamilyListResponseDto {
    pub success: bool,
    pub data: Vec<FamilySummaryDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct FamilyInfoResponseDto {
    pub success: bool,
    pub family: FamilyDetailDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct FamilyUpdateResponseDto {
    pub success: bool,
    pub message: String,
    pub family: FamilyDto,
}
