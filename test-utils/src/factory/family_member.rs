//! Family member factory for creating test member entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test family members with customizable fields.
///
/// Defaults describe an employed 30-year-old head of household with a
/// senior-high-school education.
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    family_id: i32,
    anggota_ke: i32,
    nama: String,
    umur: i32,
    hubungan: String,
    jenis_kelamin: String,
    status_perkawinan: String,
    pendidikan: String,
    kegiatan: String,
    memiliki_pekerjaan: String,
    status_pekerjaan_diinginkan: Option<String>,
    bidang_usaha: Option<String>,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory for the given family and sequence number.
    pub fn new(db: &'a DatabaseConnection, family_id: i32, anggota_ke: i32) -> Self {
        let id = next_id();
        Self {
            db,
            family_id,
            anggota_ke,
            nama: format!("Anggota {}", id),
            umur: 30,
            hubungan: "Kepala Keluarga".to_string(),
            jenis_kelamin: "Laki-Laki".to_string(),
            status_perkawinan: "Kawin".to_string(),
            pendidikan: "SMA/MA/SMK/MAK/SMALB/PAKET C".to_string(),
            kegiatan: "Bekerja".to_string(),
            memiliki_pekerjaan: "Ya".to_string(),
            status_pekerjaan_diinginkan: None,
            bidang_usaha: None,
        }
    }

    pub fn umur(mut self, umur: i32) -> Self {
        self.umur = umur;
        self
    }

    pub fn pendidikan(mut self, pendidikan: impl Into<String>) -> Self {
        self.pendidikan = pendidikan.into();
        self
    }

    /// Marks the member as unemployed with the given desired job and business field.
    pub fn unemployed(
        mut self,
        status_pekerjaan_diinginkan: impl Into<String>,
        bidang_usaha: Option<String>,
    ) -> Self {
        self.memiliki_pekerjaan = "Tidak".to_string();
        self.kegiatan = "Melakukan Kegiatan Lainnya".to_string();
        self.status_pekerjaan_diinginkan = Some(status_pekerjaan_diinginkan.into());
        self.bidang_usaha = bidang_usaha;
        self
    }

    /// Inserts the member into the database.
    pub async fn build(self) -> Result<entity::family_member::Model, DbErr> {
        entity::family_member::ActiveModel {
            family_id: ActiveValue::Set(self.family_id),
            anggota_ke: ActiveValue::Set(self.anggota_ke),
            nama: ActiveValue::Set(self.nama),
            umur: ActiveValue::Set(self.umur),
            hubungan: ActiveValue::Set(self.hubungan),
            jenis_kelamin: ActiveValue::Set(self.jenis_kelamin),
            status_perkawinan: ActiveValue::Set(self.status_perkawinan),
            pendidikan: ActiveValue::Set(self.pendidikan),
            kegiatan: ActiveValue::Set(self.kegiatan),
            memiliki_pekerjaan: ActiveValue::Set(self.memiliki_pekerjaan),
            status_pekerjaan_diinginkan: ActiveValue::Set(self.status_pekerjaan_diinginkan),
            bidang_usaha: ActiveValue::Set(self.bidang_usaha),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
pub async fn create_member(
    db: &DatabaseConnection,
    family_id: i32,
    anggota_ke: i32,
) -> Result<entity::family_member::Model, DbErr> {
    MemberFactory::new(db, family_id, anggota_ke).build().await
}
