use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct OverviewDto {
    pub total_families: i64,
    pub total_members: i64,
    pub completed_surveys: i64,
    /// Percentage of families with a completion record, one decimal; null without families
    pub completion_rate: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AreaStatsDto {
    pub rt: String,
    pub rw: String,
    pub dusun: String,
    pub total_families: i64,
    pub total_residents: i64,
    pub total_adults: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct EducationCountDto {
    pub pendidikan: String,
    pub count: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct EmploymentCountDto {
    pub memiliki_pekerjaan: String,
    pub count: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AgeGroupCountDto {
    pub age_group: String,
    pub count: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RecentFamilyDto {
    pub keluarga_id: String,
    pub nama_kepala: String,
    pub rt: String,
    pub rw: String,
    pub dusun: String,
    pub jumlah_anggota: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StatsDto {
    pub overview: OverviewDto,
    pub by_area: Vec<AreaStatsDto>,
    pub education: Vec<EducationCountDto>,
    pub employment: Vec<EmploymentCountDto>,
    pub age_distribution: Vec<AgeGroupCountDto>,
    pub recent_families: Vec<RecentFamilyDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct StatsResponseDto {
    pub success: bool,
    pub stats: StatsDto,
}
