use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::completion::{CompleteSurveyParams, SurveyCompletion};

pub struct SurveyCompletionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SurveyCompletionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Completion record of the family with surrogate id `family_id`, if submitted.
    pub async fn get_by_family_id(
        &self,
        family_id: i32,
    ) -> Result<Option<SurveyCompletion>, DbErr> {
        let entity = entity::prelude::SurveyCompletion::find()
            .filter(entity::survey_completion::Column::FamilyId.eq(family_id))
            .one(self.db)
            .await?;

        Ok(entity.map(SurveyCompletion::from_entity))
    }

    /// Creates or updates the completion record of a family.
    ///
    /// An existing record keeps its id and `created_at`; every form field and
    /// `updated_at` are overwritten.
    ///
    /// # Arguments
    /// - `family_id` - Surrogate id of the family being completed
    /// - `params` - Validated completion form
    ///
    /// # Returns
    /// - `Ok(SurveyCompletion)` - The created or updated record
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        family_id: i32,
        params: CompleteSurveyParams,
    ) -> Result<SurveyCompletion, DbErr> {
        let now = Utc::now();

        let existing = entity::prelude::SurveyCompletion::find()
            .filter(entity::survey_completion::Column::FamilyId.eq(family_id))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(existing) => {
                let mut active: entity::survey_completion::ActiveModel = existing.into();
                active.nama_pencacah = ActiveValue::Set(params.nama_pencacah);
                active.hp_pencacah = ActiveValue::Set(params.hp_pencacah);
                active.nama_pemberi_jawaban = ActiveValue::Set(params.nama_pemberi_jawaban);
                active.hp_pemberi_jawaban = ActiveValue::Set(params.hp_pemberi_jawaban);
                active.catatan = ActiveValue::Set(params.catatan);
                active.updated_at = ActiveValue::Set(now);
                active.update(self.db).await?
            }
            None => {
                entity::survey_completion::ActiveModel {
                    family_id: ActiveValue::Set(family_id),
                    nama_pencacah: ActiveValue::Set(params.nama_pencacah),
                    hp_pencacah: ActiveValue::Set(params.hp_pencacah),
                    nama_pemberi_jawaban: ActiveValue::Set(params.nama_pemberi_jawaban),
                    hp_pemberi_jawaban: ActiveValue::Set(params.hp_pemberi_jawaban),
                    catatan: ActiveValue::Set(params.catatan),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(SurveyCompletion::from_entity(entity))
    }
}
