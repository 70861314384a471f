use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "family_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub family_id: i32,
    pub anggota_ke: i32,
    pub nama: String,
    pub umur: i32,
    pub hubungan: String,
    pub jenis_kelamin: String,
    pub status_perkawinan: String,
    pub pendidikan: String,
    pub kegiatan: String,
    pub memiliki_pekerjaan: String,
    pub status_pekerjaan_diinginkan: Option<String>,
    pub bidang_usaha: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::family::Entity",
        from = "Column::FamilyId",
        to = "super::family::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Family,
}

impl Related<super::family::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Family.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
