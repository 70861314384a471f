//! Family member data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, Statement, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::member::{
    AppendMemberOutcome, AppendMemberParams, AppendedMember, Member,
};

#[derive(Debug, FromQueryResult)]
struct MemberCountRow {
    family_id: i32,
    count: i64,
}

pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a member to the family with the given `keluarga_id`.
    ///
    /// Counting the existing members and inserting the new one happen in one transaction,
    /// so a family never holds more members than its declared adult count. The new member
    /// is numbered `count + 1`.
    ///
    /// # Returns
    /// - `Ok(AppendMemberOutcome::Appended(_))` - Member inserted, with remaining adults
    /// - `Ok(AppendMemberOutcome::FamilyNotFound)` - No family with this `keluarga_id`
    /// - `Ok(AppendMemberOutcome::LimitReached)` - Nothing written
    /// - `Err(DbErr)` - Database error, transaction rolled back
    pub async fn append(&self, params: AppendMemberParams) -> Result<AppendMemberOutcome, DbErr> {
        let txn = self.db.begin().await?;

        let Some(family) = entity::prelude::Family::find()
            .filter(entity::family::Column::KeluargaId.eq(params.keluarga_id.as_str()))
            .one(&txn)
            .await?
        else {
            return Ok(AppendMemberOutcome::FamilyNotFound);
        };

        let count = entity::prelude::FamilyMember::find()
            .filter(entity::family_member::Column::FamilyId.eq(family.id))
            .count(&txn)
            .await? as i32;

        if count >= family.jumlah_anggota_15plus {
            return Ok(AppendMemberOutcome::LimitReached);
        }

        let member = params.member;
        let entity = entity::family_member::ActiveModel {
            family_id: ActiveValue::Set(family.id),
            anggota_ke: ActiveValue::Set(count + 1),
            nama: ActiveValue::Set(member.nama),
            umur: ActiveValue::Set(member.umur),
            hubungan: ActiveValue::Set(member.hubungan.to_string()),
            jenis_kelamin: ActiveValue::Set(member.jenis_kelamin.to_string()),
            status_perkawinan: ActiveValue::Set(member.status_perkawinan.to_string()),
            pendidikan: ActiveValue::Set(member.pendidikan.to_string()),
            kegiatan: ActiveValue::Set(member.kegiatan.to_string()),
            memiliki_pekerjaan: ActiveValue::Set(member.memiliki_pekerjaan.to_string()),
            status_pekerjaan_diinginkan: ActiveValue::Set(
                member.status_pekerjaan_diinginkan.map(|v| v.to_string()),
            ),
            bidang_usaha: ActiveValue::Set(member.bidang_usaha.map(|v| v.to_string())),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(AppendMemberOutcome::Appended(AppendedMember {
            remaining: family.jumlah_anggota_15plus - (count + 1),
            member: Member::from_entity(entity),
        }))
    }

    /// Counts recorded members per family id. Families without members are absent.
    pub async fn count_by_family(&self) -> Result<HashMap<i32, i64>, DbErr> {
        let rows = MemberCountRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            "SELECT family_id, COUNT(*) AS count FROM family_member GROUP BY family_id",
        ))
        .all(self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.family_id, row.count))
            .collect())
    }
}
