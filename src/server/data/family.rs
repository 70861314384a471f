//! Family data repository.
//!
//! Owns every statement touching the `family` table, including the transactional
//! update guard and the cascading delete of a family's members and completion record.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashSet;

use crate::server::{
    data::{completion::SurveyCompletionRepository, member::MemberRepository},
    model::{
        family::{
            CreateFamilyParams, Family, FamilyDetail, FamilyWithProgress, UpdateFamilyOutcome,
            UpdateFamilyParams,
        },
        member::Member,
    },
};

pub struct FamilyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FamilyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new family under the given generated id.
    ///
    /// # Returns
    /// - `Ok(Family)` - The inserted family
    /// - `Err(DbErr)` - Database error; a duplicate `keluarga_id` surfaces as a unique
    ///   constraint violation
    pub async fn create(&self, params: CreateFamilyParams) -> Result<Family, DbErr> {
        let now = Utc::now();
        let fields = params.fields;

        let entity = entity::family::ActiveModel {
            keluarga_id: ActiveValue::Set(params.keluarga_id),
            rt: ActiveValue::Set(fields.rt),
            rw: ActiveValue::Set(fields.rw),
            dusun: ActiveValue::Set(fields.dusun),
            nama_kepala: ActiveValue::Set(fields.nama_kepala),
            alamat: ActiveValue::Set(fields.alamat),
            jumlah_anggota: ActiveValue::Set(fields.jumlah_anggota),
            jumlah_anggota_15plus: ActiveValue::Set(fields.jumlah_anggota_15plus),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Family::from_entity(entity))
    }

    pub async fn get_by_keluarga_id(&self, keluarga_id: &str) -> Result<Option<Family>, DbErr> {
        let entity = entity::prelude::Family::find()
            .filter(entity::family::Column::KeluargaId.eq(keluarga_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Family::from_entity))
    }

    /// Gets every family, newest first, with its recorded member count and whether a
    /// completion record exists.
    pub async fn get_all_with_progress(&self) -> Result<Vec<FamilyWithProgress>, DbErr> {
        let families = entity::prelude::Family::find()
            .order_by_desc(entity::family::Column::CreatedAt)
            .order_by_desc(entity::family::Column::Id)
            .all(self.db)
            .await?;

        let member_counts = MemberRepository::new(self.db).count_by_family().await?;

        let completed: HashSet<i32> = entity::prelude::SurveyCompletion::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(|completion| completion.family_id)
            .collect();

        Ok(families
            .into_iter()
            .map(|family| FamilyWithProgress {
                total_members: member_counts.get(&family.id).copied().unwrap_or(0),
                completed: completed.contains(&family.id),
                family: Family::from_entity(family),
            })
            .collect())
    }

    /// Gets a family with its members ordered by `anggota_ke` and its completion record.
    ///
    /// # Returns
    /// - `Ok(Some(FamilyDetail))` - Family found
    /// - `Ok(None)` - No family with this `keluarga_id`
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_detail(&self, keluarga_id: &str) -> Result<Option<FamilyDetail>, DbErr> {
        let Some(family) = self.get_by_keluarga_id(keluarga_id).await? else {
            return Ok(None);
        };

        let members = entity::prelude::FamilyMember::find()
            .filter(entity::family_member::Column::FamilyId.eq(family.id))
            .order_by_asc(entity::family_member::Column::AnggotaKe)
            .all(self.db)
            .await?
            .into_iter()
            .map(Member::from_entity)
            .collect();

        let completion = SurveyCompletionRepository::new(self.db)
            .get_by_family_id(family.id)
            .await?;

        Ok(Some(FamilyDetail {
            family,
            members,
            completion,
        }))
    }

    /// Replaces a family's form fields.
    ///
    /// The recorded member count is read in the same transaction as the update, so the
    /// adult count can never be lowered below the members already appended.
    ///
    /// # Returns
    /// - `Ok(UpdateFamilyOutcome::Updated(Family))` - Family updated
    /// - `Ok(UpdateFamilyOutcome::NotFound)` - No family with this `keluarga_id`
    /// - `Ok(UpdateFamilyOutcome::BelowRecordedMembers { .. })` - Nothing written
    /// - `Err(DbErr)` - Database error, transaction rolled back
    pub async fn update(&self, params: UpdateFamilyParams) -> Result<UpdateFamilyOutcome, DbErr> {
        let txn = self.db.begin().await?;

        let Some(family) = entity::prelude::Family::find()
            .filter(entity::family::Column::KeluargaId.eq(params.keluarga_id.as_str()))
            .one(&txn)
            .await?
        else {
            return Ok(UpdateFamilyOutcome::NotFound);
        };

        let recorded = entity::prelude::FamilyMember::find()
            .filter(entity::family_member::Column::FamilyId.eq(family.id))
            .count(&txn)
            .await? as i64;

        let fields = params.fields;
        if i64::from(fields.jumlah_anggota_15plus) < recorded {
            return Ok(UpdateFamilyOutcome::BelowRecordedMembers { recorded });
        }

        let mut active: entity::family::ActiveModel = family.into();
        active.rt = ActiveValue::Set(fields.rt);
        active.rw = ActiveValue::Set(fields.rw);
        active.dusun = ActiveValue::Set(fields.dusun);
        active.nama_kepala = ActiveValue::Set(fields.nama_kepala);
        active.alamat = ActiveValue::Set(fields.alamat);
        active.jumlah_anggota = ActiveValue::Set(fields.jumlah_anggota);
        active.jumlah_anggota_15plus = ActiveValue::Set(fields.jumlah_anggota_15plus);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(&txn).await?;
        txn.commit().await?;

        Ok(UpdateFamilyOutcome::Updated(Family::from_entity(updated)))
    }

    /// Deletes a family together with its completion record and members.
    ///
    /// All three deletes run in one transaction; either everything is removed or nothing.
    ///
    /// # Returns
    /// - `Ok(true)` - Family and dependents deleted
    /// - `Ok(false)` - No family with this `keluarga_id`
    /// - `Err(DbErr)` - Database error, transaction rolled back
    pub async fn delete(&self, keluarga_id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let Some(family) = entity::prelude::Family::find()
            .filter(entity::family::Column::KeluargaId.eq(keluarga_id))
            .one(&txn)
            .await?
        else {
            return Ok(false);
        };

        entity::prelude::SurveyCompletion::delete_many()
            .filter(entity::survey_completion::Column::FamilyId.eq(family.id))
            .exec(&txn)
            .await?;

        entity::prelude::FamilyMember::delete_many()
            .filter(entity::family_member::Column::FamilyId.eq(family.id))
            .exec(&txn)
            .await?;

        entity::prelude::Family::delete_by_id(family.id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }
}
