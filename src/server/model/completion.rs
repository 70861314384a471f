use chrono::{DateTime, Utc};

use crate::{
    model::completion::{CompletionDto, CompletionFormDto},
    server::{
        error::AppError,
        util::parse::{non_blank, required_text},
    },
};

/// Final survey record marking a family's data entry as complete.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyCompletion {
    pub id: i32,
    pub family_id: i32,
    pub nama_pencacah: String,
    pub hp_pencacah: String,
    pub nama_pemberi_jawaban: String,
    pub hp_pemberi_jawaban: String,
    pub catatan: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SurveyCompletion {
    pub fn from_entity(entity: entity::survey_completion::Model) -> Self {
        Self {
            id: entity.id,
            family_id: entity.family_id,
            nama_pencacah: entity.nama_pencacah,
            hp_pencacah: entity.hp_pencacah,
            nama_pemberi_jawaban: entity.nama_pemberi_jawaban,
            hp_pemberi_jawaban: entity.hp_pemberi_jawaban,
            catatan: entity.catatan,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CompletionDto {
        CompletionDto {
            nama_pencacah: self.nama_pencacah,
            hp_pencacah: self.hp_pencacah,
            nama_pemberi_jawaban: self.nama_pemberi_jawaban,
            hp_pemberi_jawaban: self.hp_pemberi_jawaban,
            catatan: self.catatan,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for recording (or re-recording) the final survey step.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteSurveyParams {
    pub keluarga_id: String,
    pub nama_pencacah: String,
    pub hp_pencacah: String,
    pub nama_pemberi_jawaban: String,
    pub hp_pemberi_jawaban: String,
    /// Free-text notes; a blank submission is stored as `None`.
    pub catatan: Option<String>,
}

impl CompleteSurveyParams {
    pub fn from_dto(dto: CompletionFormDto) -> Result<Self, AppError> {
        Ok(Self {
            keluarga_id: required_text(dto.family_id)?,
            nama_pencacah: required_text(dto.nama_pencacah)?,
            hp_pencacah: required_text(dto.hp_pencacah)?,
            nama_pemberi_jawaban: required_text(dto.nama_pemberi_jawaban)?,
            hp_pemberi_jawaban: required_text(dto.hp_pemberi_jawaban)?,
            catatan: non_blank(dto.catatan),
        })
    }
}
