use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "family")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub keluarga_id: String,
    pub rt: String,
    pub rw: String,
    pub dusun: String,
    pub nama_kepala: String,
    pub alamat: String,
    pub jumlah_anggota: i32,
    pub jumlah_anggota_15plus: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::family_member::Entity")]
    FamilyMember,
    #[sea_orm(has_one = "super::survey_completion::Entity")]
    SurveyCompletion,
}

impl Related<super::family_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FamilyMember.def()
    }
}

impl Related<super::survey_completion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SurveyCompletion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
