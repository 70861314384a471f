//! Filtered raw rows for client-side spreadsheet export.

use chrono::{DateTime, Utc};

use crate::{
    model::export::{
        AreaDto, ExportDataDto, ExportFamilyDto, ExportMemberDto, ExportQuery, ExportSummaryDto,
    },
    server::{
        model::{completion::SurveyCompletion, family::Family, member::Member},
        util::parse::non_blank,
    },
};

/// Area equality filters. `None` fields are not applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaFilter {
    pub rt: Option<String>,
    pub rw: Option<String>,
    pub dusun: Option<String>,
}

impl AreaFilter {
    /// Builds the filter from query parameters, ignoring blank values.
    pub fn from_query(query: ExportQuery) -> Self {
        Self {
            rt: non_blank(query.rt),
            rw: non_blank(query.rw),
            dusun: non_blank(query.dusun),
        }
    }

    fn into_query(self) -> ExportQuery {
        ExportQuery {
            rt: self.rt,
            rw: self.rw,
            dusun: self.dusun,
        }
    }
}

/// Family row with its member count and optional completion record.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFamily {
    pub family: Family,
    pub member_count: i64,
    pub completion: Option<SurveyCompletion>,
}

/// Member row together with the owning family's identifying columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportMember {
    pub member: Member,
    pub keluarga_id: String,
    pub rt: String,
    pub rw: String,
    pub dusun: String,
    pub nama_kepala: String,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Area {
    pub rt: String,
    pub rw: String,
    pub dusun: String,
}

/// Complete export payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportData {
    pub families: Vec<ExportFamily>,
    pub members: Vec<ExportMember>,
    /// Distinct areas over all families, independent of the filter.
    pub filter_options: Vec<Area>,
    pub filter: AreaFilter,
    pub export_date: DateTime<Utc>,
}

impl ExportData {
    pub fn into_dto(self) -> ExportDataDto {
        let summary = ExportSummaryDto {
            total_families: self.families.len(),
            total_members: self.members.len(),
            export_date: self.export_date,
            filters: self.filter.into_query(),
        };

        ExportDataDto {
            families: self
                .families
                .into_iter()
                .map(|row| {
                    let completion = row.completion;
                    ExportFamilyDto {
                        family: row.family.into_dto(),
                        member_count: row.member_count,
                        completed: completion.is_some(),
                        nama_pencacah: completion.as_ref().map(|c| c.nama_pencacah.clone()),
                        hp_pencacah: completion.as_ref().map(|c| c.hp_pencacah.clone()),
                        nama_pemberi_jawaban: completion
                            .as_ref()
                            .map(|c| c.nama_pemberi_jawaban.clone()),
                        hp_pemberi_jawaban: completion
                            .as_ref()
                            .map(|c| c.hp_pemberi_jawaban.clone()),
                        catatan: completion.and_then(|c| c.catatan),
                    }
                })
                .collect(),
            members: self
                .members
                .into_iter()
                .map(|row| ExportMemberDto {
                    keluarga_id: row.keluarga_id,
                    rt: row.rt,
                    rw: row.rw,
                    dusun: row.dusun,
                    nama_kepala: row.nama_kepala,
                    anggota_ke: row.member.anggota_ke,
                    nama: row.member.nama,
                    umur: row.member.umur,
                    hubungan: row.member.hubungan,
                    jenis_kelamin: row.member.jenis_kelamin,
                    status_perkawinan: row.member.status_perkawinan,
                    pendidikan: row.member.pendidikan,
                    kegiatan: row.member.kegiatan,
                    memiliki_pekerjaan: row.member.memiliki_pekerjaan,
                    status_pekerjaan_diinginkan: row.member.status_pekerjaan_diinginkan,
                    bidang_usaha: row.member.bidang_usaha,
                })
                .collect(),
            filter_options: self
                .filter_options
                .into_iter()
                .map(|area| AreaDto {
                    rt: area.rt,
                    rw: area.rw,
                    dusun: area.dusun,
                })
                .collect(),
            summary,
        }
    }
}
