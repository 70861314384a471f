//! Survey completion factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a completion record for the family with fixed enumerator and respondent data.
pub async fn create_completion(
    db: &DatabaseConnection,
    family_id: i32,
) -> Result<entity::survey_completion::Model, DbErr> {
    let now = Utc::now();
    entity::survey_completion::ActiveModel {
        family_id: ActiveValue::Set(family_id),
        nama_pencacah: ActiveValue::Set("Pencacah Uji".to_string()),
        hp_pencacah: ActiveValue::Set("081200000001".to_string()),
        nama_pemberi_jawaban: ActiveValue::Set("Responden Uji".to_string()),
        hp_pemberi_jawaban: ActiveValue::Set("081200000002".to_string()),
        catatan: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
