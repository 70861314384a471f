//! Export data repository.
//!
//! Area filters are applied as equality conditions on the family's `rt`, `rw` and
//! `dusun` columns, to the family rows directly and to member rows through the join.

use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, Statement,
};

use crate::server::{
    data::member::MemberRepository,
    model::{
        completion::SurveyCompletion,
        export::{Area, AreaFilter, ExportFamily, ExportMember},
        family::Family,
        member::Member,
    },
};

#[derive(Debug, FromQueryResult)]
struct AreaRow {
    rt: String,
    rw: String,
    dusun: String,
}

/// Builds the family-column condition for the provided filters.
fn area_condition(filter: &AreaFilter) -> Condition {
    let mut condition = Condition::all();
    if let Some(rt) = &filter.rt {
        condition = condition.add(entity::family::Column::Rt.eq(rt.as_str()));
    }
    if let Some(rw) = &filter.rw {
        condition = condition.add(entity::family::Column::Rw.eq(rw.as_str()));
    }
    if let Some(dusun) = &filter.dusun {
        condition = condition.add(entity::family::Column::Dusun.eq(dusun.as_str()));
    }
    condition
}

pub struct ExportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Families matching the filter, newest first, with member counts and completion.
    pub async fn families(&self, filter: &AreaFilter) -> Result<Vec<ExportFamily>, DbErr> {
        let rows = entity::prelude::Family::find()
            .filter(area_condition(filter))
            .find_also_related(entity::prelude::SurveyCompletion)
            .order_by_desc(entity::family::Column::CreatedAt)
            .order_by_desc(entity::family::Column::Id)
            .all(self.db)
            .await?;

        let member_counts = MemberRepository::new(self.db).count_by_family().await?;

        Ok(rows
            .into_iter()
            .map(|(family, completion)| ExportFamily {
                member_count: member_counts.get(&family.id).copied().unwrap_or(0),
                family: Family::from_entity(family),
                completion: completion.map(SurveyCompletion::from_entity),
            })
            .collect())
    }

    /// Members of families matching the filter, ordered by `keluarga_id` then `anggota_ke`.
    pub async fn members(&self, filter: &AreaFilter) -> Result<Vec<ExportMember>, DbErr> {
        let rows = entity::prelude::FamilyMember::find()
            .find_also_related(entity::prelude::Family)
            .filter(area_condition(filter))
            .order_by_asc(entity::family::Column::KeluargaId)
            .order_by_asc(entity::family_member::Column::AnggotaKe)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(member, family)| {
                family.map(|family| ExportMember {
                    member: Member::from_entity(member),
                    keluarga_id: family.keluarga_id,
                    rt: family.rt,
                    rw: family.rw,
                    dusun: family.dusun,
                    nama_kepala: family.nama_kepala,
                })
            })
            .collect())
    }

    /// Distinct areas over all families, ordered by rt, rw, dusun.
    pub async fn areas(&self) -> Result<Vec<Area>, DbErr> {
        let rows = AreaRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            "SELECT DISTINCT rt, rw, dusun FROM family ORDER BY rt, rw, dusun",
        ))
        .all(self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Area {
                rt: row.rt,
                rw: row.rw,
                dusun: row.dusun,
            })
            .collect())
    }
}
