//! Family domain models and parameters.
//!
//! A family (keluarga) is the primary survey unit. Its declared member counts drive
//! the rest of the workflow: `jumlah_anggota_15plus` decides how many member forms
//! follow the family form.

use chrono::{DateTime, Utc};

use crate::{
    model::family::{FamilyDetailDto, FamilyDto, FamilyFormDto, FamilySummaryDto},
    server::{
        error::AppError,
        model::{completion::SurveyCompletion, member::Member},
        util::parse::{required_number, required_text},
    },
};

/// Family record as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Family {
    pub id: i32,
    /// Generated human-readable id, e.g. `KEL-001002-20250801083000`.
    pub keluarga_id: String,
    pub rt: String,
    pub rw: String,
    pub dusun: String,
    pub nama_kepala: String,
    pub alamat: String,
    /// Declared total household members.
    pub jumlah_anggota: i32,
    /// Declared household members aged 15 or older.
    pub jumlah_anggota_15plus: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Family {
    /// Converts an entity model to a family domain model at the repository boundary.
    pub fn from_entity(entity: entity::family::Model) -> Self {
        Self {
            id: entity.id,
            keluarga_id: entity.keluarga_id,
            rt: entity.rt,
            rw: entity.rw,
            dusun: entity.dusun,
            nama_kepala: entity.nama_kepala,
            alamat: entity.alamat,
            jumlah_anggota: entity.jumlah_anggota,
            jumlah_anggota_15plus: entity.jumlah_anggota_15plus,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> FamilyDto {
        FamilyDto {
            id: self.id,
            keluarga_id: self.keluarga_id,
            rt: self.rt,
            rw: self.rw,
            dusun: self.dusun,
            nama_kepala: self.nama_kepala,
            alamat: self.alamat,
            jumlah_anggota: self.jumlah_anggota,
            jumlah_anggota_15plus: self.jumlah_anggota_15plus,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated family form fields shared by create and update.
///
/// Construction through `from_dto` guarantees every field is present, the declared
/// total is at least 1, and `0 <= jumlah_anggota_15plus <= jumlah_anggota`.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyFields {
    pub rt: String,
    pub rw: String,
    pub dusun: String,
    pub nama_kepala: String,
    pub alamat: String,
    pub jumlah_anggota: i32,
    pub jumlah_anggota_15plus: i32,
}

impl FamilyFields {
    /// Validates a submitted family form.
    ///
    /// # Returns
    /// - `Ok(FamilyFields)` - All fields present and counts within bounds
    /// - `Err(AppError::BadRequest)` - Missing field, `jumlah_anggota < 1`, or adult count
    ///   outside `0..=jumlah_anggota`
    pub fn from_dto(dto: FamilyFormDto) -> Result<Self, AppError> {
        let fields = Self {
            rt: required_text(dto.rt)?,
            rw: required_text(dto.rw)?,
            dusun: required_text(dto.dusun)?,
            nama_kepala: required_text(dto.nama_kepala)?,
            alamat: required_text(dto.alamat)?,
            jumlah_anggota: required_number(dto.jumlah_anggota)?,
            jumlah_anggota_15plus: required_number(dto.jumlah_anggota_15plus)?,
        };

        if !is_area_code(&fields.rt) || !is_area_code(&fields.rw) {
            return Err(AppError::BadRequest(AREA_CODE_MESSAGE.to_string()));
        }

        if fields.jumlah_anggota < 1 {
            return Err(AppError::BadRequest(
                "Jumlah anggota keluarga minimal 1".to_string(),
            ));
        }

        if fields.jumlah_anggota_15plus < 0 || fields.jumlah_anggota_15plus > fields.jumlah_anggota
        {
            return Err(AppError::BadRequest(
                "Jumlah anggota usia 15+ tidak valid".to_string(),
            ));
        }

        Ok(fields)
    }
}

pub const AREA_CODE_MESSAGE: &str = "RT dan RW harus berupa angka";

/// RT and RW codes are digits only; they become part of the family id and its URLs.
fn is_area_code(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}

/// Parameters for inserting a new family under a generated id.
#[derive(Debug, Clone)]
pub struct CreateFamilyParams {
    pub keluarga_id: String,
    pub fields: FamilyFields,
}

/// Parameters for replacing the form fields of an existing family.
#[derive(Debug, Clone)]
pub struct UpdateFamilyParams {
    pub keluarga_id: String,
    pub fields: FamilyFields,
}

/// Result of an update attempt, decided inside a single transaction.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateFamilyOutcome {
    Updated(Family),
    NotFound,
    /// The new adult count is lower than the members already recorded.
    BelowRecordedMembers { recorded: i64 },
}

/// Family with data-entry progress, used by the management list.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyWithProgress {
    pub family: Family,
    /// Number of member rows recorded so far.
    pub total_members: i64,
    /// Whether a survey completion record exists.
    pub completed: bool,
}

impl FamilyWithProgress {
    pub fn into_dto(self) -> FamilySummaryDto {
        FamilySummaryDto {
            family: self.family.into_dto(),
            total_members: self.total_members,
            completed: self.completed,
        }
    }
}

/// Family with all recorded members and its optional completion record.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyDetail {
    pub family: Family,
    /// Members ordered by `anggota_ke`.
    pub members: Vec<Member>,
    pub completion: Option<SurveyCompletion>,
}

impl FamilyDetail {
    pub fn into_dto(self) -> FamilyDetailDto {
        FamilyDetailDto {
            family: self.family.into_dto(),
            members: self.members.into_iter().map(Member::into_dto).collect(),
            completion: self.completion.map(SurveyCompletion::into_dto),
        }
    }
}
