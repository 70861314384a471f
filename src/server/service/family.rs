//! Family workflow rules: id generation, next-step routing and the CRUD operations.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::family::FamilyRepository,
    error::AppError,
    model::family::{
        CreateFamilyParams, Family, FamilyDetail, FamilyFields, FamilyWithProgress,
        UpdateFamilyOutcome, UpdateFamilyParams,
    },
};

/// Attempts made to find a free family id before giving up.
const MAX_ID_ATTEMPTS: u32 = 20;

pub const FAMILY_NOT_FOUND_MESSAGE: &str = "Family not found";

/// Builds the family id `KEL-{rt}{rw}-{YYYYMMDDHHMMSS}`.
///
/// The first attempt has no suffix; later attempts append `-{attempt}` starting at `-2`.
pub fn generate_family_id(rt: &str, rw: &str, now: DateTime<Utc>, attempt: u32) -> String {
    let base = format!("KEL-{}{}-{}", rt, rw, now.format("%Y%m%d%H%M%S"));
    if attempt <= 1 {
        base
    } else {
        format!("{}-{}", base, attempt)
    }
}

/// URL of the workflow step that follows the family form.
pub fn next_step_url(family: &Family) -> String {
    if family.jumlah_anggota_15plus > 0 {
        format!("/members?family_id={}", family.keluarga_id)
    } else {
        format!("/final?family_id={}", family.keluarga_id)
    }
}

/// Confirmation shown after the family form, naming the step that follows.
pub fn submit_message(family: &Family) -> &'static str {
    if family.jumlah_anggota_15plus > 0 {
        "Data keluarga berhasil disimpan. Lanjutkan ke input anggota keluarga."
    } else {
        "Data keluarga berhasil disimpan. Lanjutkan ke halaman akhir."
    }
}

pub struct FamilyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FamilyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a family under a freshly generated id.
    pub async fn create(&self, fields: FamilyFields) -> Result<Family, AppError> {
        self.create_at(fields, Utc::now()).await
    }

    /// Creates a family with an id derived from `now`.
    ///
    /// When the id is already taken the insert is retried with the next numeric suffix.
    ///
    /// # Returns
    /// - `Ok(Family)` - Family stored under a unique id
    /// - `Err(AppError::InternalError)` - No free id within `MAX_ID_ATTEMPTS`
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn create_at(
        &self,
        fields: FamilyFields,
        now: DateTime<Utc>,
    ) -> Result<Family, AppError> {
        let repo = FamilyRepository::new(self.db);

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let keluarga_id = generate_family_id(&fields.rt, &fields.rw, now, attempt);

            match repo
                .create(CreateFamilyParams {
                    keluarga_id: keluarga_id.clone(),
                    fields: fields.clone(),
                })
                .await
            {
                Ok(family) => {
                    tracing::info!("Created family {}", family.keluarga_id);
                    return Ok(family);
                }
                Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                    tracing::debug!("Family id {} already taken, retrying", keluarga_id);
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(AppError::InternalError(format!(
            "No free family id after {} attempts",
            MAX_ID_ATTEMPTS
        )))
    }

    pub async fn get_all(&self) -> Result<Vec<FamilyWithProgress>, AppError> {
        let repo = FamilyRepository::new(self.db);

        Ok(repo.get_all_with_progress().await?)
    }

    pub async fn get_detail(&self, keluarga_id: &str) -> Result<FamilyDetail, AppError> {
        let repo = FamilyRepository::new(self.db);

        repo.get_detail(keluarga_id)
            .await?
            .ok_or_else(|| AppError::NotFound(FAMILY_NOT_FOUND_MESSAGE.to_string()))
    }

    /// Replaces a family's form fields.
    ///
    /// # Returns
    /// - `Ok(Family)` - The updated family
    /// - `Err(AppError::NotFound)` - Unknown family
    /// - `Err(AppError::BadRequest)` - Adult count below the members already recorded
    pub async fn update(&self, params: UpdateFamilyParams) -> Result<Family, AppError> {
        let repo = FamilyRepository::new(self.db);

        match repo.update(params).await? {
            UpdateFamilyOutcome::Updated(family) => Ok(family),
            UpdateFamilyOutcome::NotFound => {
                Err(AppError::NotFound(FAMILY_NOT_FOUND_MESSAGE.to_string()))
            }
            UpdateFamilyOutcome::BelowRecordedMembers { recorded } => {
                Err(AppError::BadRequest(format!(
                    "Jumlah anggota usia 15+ tidak boleh kurang dari jumlah anggota yang sudah diinput ({})",
                    recorded
                )))
            }
        }
    }

    /// Deletes a family with its members and completion record.
    pub async fn delete(&self, keluarga_id: &str) -> Result<(), AppError> {
        let repo = FamilyRepository::new(self.db);

        if !repo.delete(keluarga_id).await? {
            return Err(AppError::NotFound(FAMILY_NOT_FOUND_MESSAGE.to_string()));
        }

        tracing::info!("Deleted family {}", keluarga_id);

        Ok(())
    }
}
