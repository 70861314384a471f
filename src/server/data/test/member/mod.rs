use crate::server::{
    data::member::MemberRepository,
    model::member::{
        AppendMemberOutcome, AppendMemberParams, BidangUsaha, Hubungan, JenisKelamin, Kegiatan,
        MemilikiPekerjaan, NewMember, Pendidikan, StatusPekerjaanDiinginkan, StatusPerkawinan,
    },
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod append;
mod count_by_family;

/// Employed adult member for the given family.
fn params(keluarga_id: &str) -> AppendMemberParams {
    AppendMemberParams {
        keluarga_id: keluarga_id.to_string(),
        member: NewMember {
            nama: "Siti Aminah".to_string(),
            umur: 34,
            hubungan: Hubungan::SuamiIstri,
            jenis_kelamin: JenisKelamin::Perempuan,
            status_perkawinan: StatusPerkawinan::Kawin,
            pendidikan: Pendidikan::Sma,
            kegiatan: Kegiatan::MengurusRumahTangga,
            memiliki_pekerjaan: MemilikiPekerjaan::Ya,
            status_pekerjaan_diinginkan: None,
            bidang_usaha: None,
        },
    }
}
