use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::export::ExportRepository,
    error::AppError,
    model::export::{AreaFilter, ExportData},
};

pub struct ExportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Collects filtered family and member rows plus the area options for the filter form.
    pub async fn export(&self, filter: AreaFilter) -> Result<ExportData, AppError> {
        let repo = ExportRepository::new(self.db);

        let families = repo.families(&filter).await?;
        let members = repo.members(&filter).await?;
        let filter_options = repo.areas().await?;

        Ok(ExportData {
            families,
            members,
            filter_options,
            filter,
            export_date: Utc::now(),
        })
    }
}
