//! Read-only aggregate queries behind the dashboard statistics.
//!
//! Grouped counts are issued as parameter-free SQL through `FromQueryResult`; the
//! remaining totals and listings use the entity query builder.

use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, PaginatorTrait,
    QueryOrder, QuerySelect, Statement,
};
use std::collections::BTreeMap;

use crate::server::model::dashboard::{
    age_bracket, AreaStats, RecentFamily, ValueCount, AGE_BRACKETS,
};

/// Member columns that can be tallied by value.
#[derive(Debug, Clone, Copy)]
pub enum MemberCategory {
    Pendidikan,
    MemilikiPekerjaan,
}

impl MemberCategory {
    fn column(&self) -> &'static str {
        match self {
            Self::Pendidikan => "pendidikan",
            Self::MemilikiPekerjaan => "memiliki_pekerjaan",
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct AreaRow {
    rt: String,
    rw: String,
    dusun: String,
    total_families: i64,
    total_residents: i64,
    total_adults: i64,
}

#[derive(Debug, FromQueryResult)]
struct ValueCountRow {
    value: String,
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct AgeCountRow {
    umur: i32,
    count: i64,
}

pub struct DashboardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns `(total_families, total_members, completed_surveys)`.
    pub async fn totals(&self) -> Result<(i64, i64, i64), DbErr> {
        let families = entity::prelude::Family::find().count(self.db).await?;
        let members = entity::prelude::FamilyMember::find().count(self.db).await?;
        let completed = entity::prelude::SurveyCompletion::find()
            .count(self.db)
            .await?;

        Ok((families as i64, members as i64, completed as i64))
    }

    /// Per-area totals ordered by rt, rw, dusun.
    ///
    /// Members are counted per family before joining, so each family's declared size is
    /// summed exactly once regardless of how many members it has.
    pub async fn by_area(&self) -> Result<Vec<AreaStats>, DbErr> {
        let sql = "SELECT f.rt, f.rw, f.dusun, \
                   COUNT(f.id) AS total_families, \
                   COALESCE(SUM(f.jumlah_anggota), 0) AS total_residents, \
                   COALESCE(SUM(m.member_count), 0) AS total_adults \
                   FROM family f \
                   LEFT JOIN (SELECT family_id, COUNT(*) AS member_count \
                              FROM family_member GROUP BY family_id) m \
                   ON m.family_id = f.id \
                   GROUP BY f.rt, f.rw, f.dusun \
                   ORDER BY f.rt, f.rw, f.dusun";

        let rows = AreaRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            sql,
        ))
        .all(self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| AreaStats {
                rt: row.rt,
                rw: row.rw,
                dusun: row.dusun,
                total_families: row.total_families,
                total_residents: row.total_residents,
                total_adults: row.total_adults,
            })
            .collect())
    }

    /// Member counts per value of a categorical column, largest first.
    pub async fn count_by(&self, category: MemberCategory) -> Result<Vec<ValueCount>, DbErr> {
        let column = category.column();
        let sql = format!(
            "SELECT {column} AS value, COUNT(*) AS count FROM family_member \
             GROUP BY {column} ORDER BY count DESC, {column} ASC"
        );

        let rows = ValueCountRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            sql,
        ))
        .all(self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| ValueCount {
                value: row.value,
                count: row.count,
            })
            .collect())
    }

    /// Member counts per age bracket in bracket order, omitting empty brackets.
    pub async fn age_distribution(&self) -> Result<Vec<ValueCount>, DbErr> {
        let rows = AgeCountRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            "SELECT umur, COUNT(*) AS count FROM family_member GROUP BY umur",
        ))
        .all(self.db)
        .await?;

        let mut counts: BTreeMap<usize, i64> = BTreeMap::new();
        for row in rows {
            if let Some(index) = age_bracket(row.umur) {
                *counts.entry(index).or_default() += row.count;
            }
        }

        Ok(counts
            .into_iter()
            .map(|(index, count)| ValueCount {
                value: AGE_BRACKETS[index].0.to_string(),
                count,
            })
            .collect())
    }

    /// The most recently created families.
    pub async fn recent_families(&self, limit: u64) -> Result<Vec<RecentFamily>, DbErr> {
        let families = entity::prelude::Family::find()
            .order_by_desc(entity::family::Column::CreatedAt)
            .order_by_desc(entity::family::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(families
            .into_iter()
            .map(|family| RecentFamily {
                keluarga_id: family.keluarga_id,
                nama_kepala: family.nama_kepala,
                rt: family.rt,
                rw: family.rw,
                dusun: family.dusun,
                jumlah_anggota: family.jumlah_anggota,
                created_at: family.created_at,
            })
            .collect())
    }
}
