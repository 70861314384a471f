//! Family factory for creating test family entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test families with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let family = FamilyFactory::new(&db)
///     .area("003", "001", "Sukamaju")
///     .jumlah_anggota(4)
///     .jumlah_anggota_15plus(2)
///     .build()
///     .await?;
/// ```
pub struct FamilyFactory<'a> {
    db: &'a DatabaseConnection,
    keluarga_id: String,
    rt: String,
    rw: String,
    dusun: String,
    nama_kepala: String,
    alamat: String,
    jumlah_anggota: i32,
    jumlah_anggota_15plus: i32,
    created_at: DateTime<Utc>,
}

impl<'a> FamilyFactory<'a> {
    /// Creates a new FamilyFactory with default values.
    ///
    /// Defaults:
    /// - keluarga_id: `"KEL-TEST-{id}"` where id is auto-incremented
    /// - area: RT `001`, RW `001`, dusun `Krajan`
    /// - jumlah_anggota: `4`, jumlah_anggota_15plus: `2`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            keluarga_id: format!("KEL-TEST-{}", id),
            rt: "001".to_string(),
            rw: "001".to_string(),
            dusun: "Krajan".to_string(),
            nama_kepala: format!("Kepala {}", id),
            alamat: format!("Jalan Melati No. {}", id),
            jumlah_anggota: 4,
            jumlah_anggota_15plus: 2,
            created_at: Utc::now(),
        }
    }

    pub fn keluarga_id(mut self, keluarga_id: impl Into<String>) -> Self {
        self.keluarga_id = keluarga_id.into();
        self
    }

    /// Sets the RT, RW and dusun of the family.
    pub fn area(
        mut self,
        rt: impl Into<String>,
        rw: impl Into<String>,
        dusun: impl Into<String>,
    ) -> Self {
        self.rt = rt.into();
        self.rw = rw.into();
        self.dusun = dusun.into();
        self
    }

    pub fn nama_kepala(mut self, nama_kepala: impl Into<String>) -> Self {
        self.nama_kepala = nama_kepala.into();
        self
    }

    pub fn jumlah_anggota(mut self, jumlah_anggota: i32) -> Self {
        self.jumlah_anggota = jumlah_anggota;
        self
    }

    pub fn jumlah_anggota_15plus(mut self, jumlah_anggota_15plus: i32) -> Self {
        self.jumlah_anggota_15plus = jumlah_anggota_15plus;
        self
    }

    /// Sets the creation timestamp, used when ordering by recency matters.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Inserts the family into the database.
    pub async fn build(self) -> Result<entity::family::Model, DbErr> {
        entity::family::ActiveModel {
            keluarga_id: ActiveValue::Set(self.keluarga_id),
            rt: ActiveValue::Set(self.rt),
            rw: ActiveValue::Set(self.rw),
            dusun: ActiveValue::Set(self.dusun),
            nama_kepala: ActiveValue::Set(self.nama_kepala),
            alamat: ActiveValue::Set(self.alamat),
            jumlah_anggota: ActiveValue::Set(self.jumlah_anggota),
            jumlah_anggota_15plus: ActiveValue::Set(self.jumlah_anggota_15plus),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a family with default values.
pub async fn create_family(db: &DatabaseConnection) -> Result<entity::family::Model, DbErr> {
    FamilyFactory::new(db).build().await
}
