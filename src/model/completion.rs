use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Final-step form recording who collected and who answered the survey.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CompletionFormDto {
    pub family_id: Option<String>,
    pub nama_pencacah: Option<String>,
    pub hp_pencacah: Option<String>,
    pub nama_pemberi_jawaban: Option<String>,
    pub hp_pemberi_jawaban: Option<String>,
    pub catatan: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CompletionDto {
    pub nama_pencacah: String,
    pub hp_pencacah: String,
    pub nama_pemberi_jawaban: String,
    pub hp_pemberi_jawaban: String,
    pub catatan: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
