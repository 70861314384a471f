use sea_orm::DatabaseConnection;

use crate::server::{
    data::{completion::SurveyCompletionRepository, family::FamilyRepository},
    error::AppError,
    model::completion::{CompleteSurveyParams, SurveyCompletion},
    service::family::FAMILY_NOT_FOUND_MESSAGE,
};

pub struct SurveyCompletionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SurveyCompletionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the final survey step, overwriting any earlier submission.
    pub async fn submit(&self, params: CompleteSurveyParams) -> Result<SurveyCompletion, AppError> {
        let family = FamilyRepository::new(self.db)
            .get_by_keluarga_id(&params.keluarga_id)
            .await?
            .ok_or_else(|| AppError::NotFound(FAMILY_NOT_FOUND_MESSAGE.to_string()))?;

        let completion = SurveyCompletionRepository::new(self.db)
            .upsert(family.id, params)
            .await?;

        tracing::info!("Completed survey for family {}", family.keluarga_id);

        Ok(completion)
    }
}
