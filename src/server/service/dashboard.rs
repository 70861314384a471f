use sea_orm::DatabaseConnection;

use crate::server::{
    data::dashboard::{DashboardRepository, MemberCategory},
    error::AppError,
    model::dashboard::{Overview, Stats},
};

/// Number of families listed under recent activity.
const RECENT_FAMILIES_LIMIT: u64 = 10;

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Composes every dashboard statistic.
    pub async fn stats(&self) -> Result<Stats, AppError> {
        let repo = DashboardRepository::new(self.db);

        let (total_families, total_members, completed_surveys) = repo.totals().await?;

        Ok(Stats {
            overview: Overview::from_totals(total_families, total_members, completed_surveys),
            by_area: repo.by_area().await?,
            education: repo.count_by(MemberCategory::Pendidikan).await?,
            employment: repo.count_by(MemberCategory::MemilikiPekerjaan).await?,
            age_distribution: repo.age_distribution().await?,
            recent_families: repo.recent_families(RECENT_FAMILIES_LIMIT).await?,
        })
    }
}
