//! Aggregated census statistics shown on the dashboard.

use chrono::{DateTime, Utc};

use crate::model::dashboard::{
    AgeGroupCountDto, AreaStatsDto, EducationCountDto, EmploymentCountDto, OverviewDto,
    RecentFamilyDto, StatsDto,
};

/// Headline totals across every family.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub total_families: i64,
    pub total_members: i64,
    pub completed_surveys: i64,
    /// Percentage rounded to one decimal; `None` when there are no families.
    pub completion_rate: Option<f64>,
}

impl Overview {
    /// Builds the overview from raw totals, deriving the completion rate.
    pub fn from_totals(total_families: i64, total_members: i64, completed_surveys: i64) -> Self {
        Self {
            total_families,
            total_members,
            completed_surveys,
            completion_rate: completion_rate(completed_surveys, total_families),
        }
    }
}

/// Completed families as a percentage of all families, rounded to one decimal.
pub fn completion_rate(completed: i64, total: i64) -> Option<f64> {
    if total <= 0 {
        return None;
    }
    let rate = completed as f64 * 100.0 / total as f64;
    Some((rate * 10.0).round() / 10.0)
}

/// Totals for one (rt, rw, dusun) area.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaStats {
    pub rt: String,
    pub rw: String,
    pub dusun: String,
    pub total_families: i64,
    /// Sum of declared household sizes.
    pub total_residents: i64,
    /// Recorded members (aged 15+).
    pub total_adults: i64,
}

/// Number of members sharing one categorical value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueCount {
    pub value: String,
    pub count: i64,
}

/// Age brackets in display order, as `(label, inclusive lower bound)`.
pub const AGE_BRACKETS: [(&str, i32); 6] = [
    ("15-24", 15),
    ("25-34", 25),
    ("35-44", 35),
    ("45-54", 45),
    ("55-64", 55),
    ("65+", 65),
];

/// Returns the index into `AGE_BRACKETS` an age falls into, if any.
pub fn age_bracket(umur: i32) -> Option<usize> {
    AGE_BRACKETS.iter().rposition(|(_, lower)| umur >= *lower)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentFamily {
    pub keluarga_id: String,
    pub nama_kepala: String,
    pub rt: String,
    pub rw: String,
    pub dusun: String,
    pub jumlah_anggota: i32,
    pub created_at: DateTime<Utc>,
}

/// Complete dashboard statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub overview: Overview,
    pub by_area: Vec<AreaStats>,
    pub education: Vec<ValueCount>,
    pub employment: Vec<ValueCount>,
    /// Non-empty brackets in `AGE_BRACKETS` order.
    pub age_distribution: Vec<ValueCount>,
    pub recent_families: Vec<RecentFamily>,
}

impl Stats {
    pub fn into_dto(self) -> StatsDto {
        StatsDto {
            overview: OverviewDto {
                total_families: self.overview.total_families,
                total_members: self.overview.total_members,
                completed_surveys: self.overview.completed_surveys,
                completion_rate: self.overview.completion_rate,
            },
            by_area: self
                .by_area
                .into_iter()
                .map(|area| AreaStatsDto {
                    rt: area.rt,
                    rw: area.rw,
                    dusun: area.dusun,
                    total_families: area.total_families,
                    total_residents: area.total_residents,
                    total_adults: area.total_adults,
                })
                .collect(),
            education: self
                .education
                .into_iter()
                .map(|row| EducationCountDto {
                    pendidikan: row.value,
                    count: row.count,
                })
                .collect(),
            employment: self
                .employment
                .into_iter()
                .map(|row| EmploymentCountDto {
                    memiliki_pekerjaan: row.value,
                    count: row.count,
                })
                .collect(),
            age_distribution: self
                .age_distribution
                .into_iter()
                .map(|row| AgeGroupCountDto {
                    age_group: row.value,
                    count: row.count,
                })
                .collect(),
            recent_families: self
                .recent_families
                .into_iter()
                .map(|family| RecentFamilyDto {
                    keluarga_id: family.keluarga_id,
                    nama_kepala: family.nama_kepala,
                    rt: family.rt,
                    rw: family.rw,
                    dusun: family.dusun,
                    jumlah_anggota: family.jumlah_anggota,
                    created_at: family.created_at,
                })
                .collect(),
        }
    }
}
