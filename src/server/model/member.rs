//! Household member domain models and the member form's closed value sets.

use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

use crate::{
    model::member::{MemberDto, MemberFormDto, MemberSubmitResponseDto},
    server::{
        error::AppError,
        util::parse::{non_blank, required_number, required_text},
    },
};

/// Minimum age for a recorded household member.
pub const MIN_MEMBER_AGE: i32 = 15;

/// A closed set of labels accepted by one member form field.
pub trait FormValue: FromStr<Err = AppError> {
    /// Form field this value set belongs to.
    const FIELD: &'static str;
}

/// Declares a closed set of form values.
///
/// Each generated enum parses from and displays as its exact form label; parsing an
/// unknown label yields a `BadRequest` naming the form field.
macro_rules! form_values {
    ($(#[$meta:meta])* $name:ident, $field:literal { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl FormValue for $name {
            const FIELD: &'static str = $field;
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($label => Ok(Self::$variant),)+
                    _ => Err(AppError::BadRequest(format!(
                        "Nilai {} tidak valid",
                        <Self as FormValue>::FIELD
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

form_values!(
    /// Relationship to the head of household.
    Hubungan, "hubungan" {
        KepalaKeluarga => "Kepala Keluarga",
        SuamiIstri => "Suami/Istri",
        Anak => "Anak",
        Menantu => "Menantu",
        Lainnya => "Lainnya",
    }
);

form_values!(
    JenisKelamin, "jenis_kelamin" {
        LakiLaki => "Laki-Laki",
        Perempuan => "Perempuan",
    }
);

form_values!(
    StatusPerkawinan, "status_perkawinan" {
        BelumKawin => "Belum Kawin",
        Kawin => "Kawin",
        CeraiHidup => "Cerai Hidup",
        CeraiMati => "Cerai Mati",
    }
);

form_values!(
    /// Highest completed education level.
    Pendidikan, "pendidikan" {
        BelumTamatSd => "Tidak/Belum Tamat SD",
        Sd => "SD/MI/SDLB/PAKET A",
        Smp => "SMP/MTS/SMPLB/PAKET B",
        Sma => "SMA/MA/SMK/MAK/SMALB/PAKET C",
        PerguruanTinggi => "PERGURUAN TINGGI",
    }
);

form_values!(
    /// Main activity during the past week.
    Kegiatan, "kegiatan" {
        Bekerja => "Bekerja",
        Sekolah => "Sekolah",
        MengurusRumahTangga => "Mengurus Rumah Tangga",
        Lainnya => "Melakukan Kegiatan Lainnya",
    }
);

form_values!(
    MemilikiPekerjaan, "memiliki_pekerjaan" {
        Ya => "Ya",
        Tidak => "Tidak",
    }
);

form_values!(
    /// Kind of work an unemployed member would like.
    StatusPekerjaanDiinginkan, "status_pekerjaan_diinginkan" {
        BerusahaSendiri => "Berusaha Sendiri",
        Buruh => "Buruh/Karyawan/Pegawai/Pekerja Bebas",
    }
);

form_values!(
    /// Training field of interest for members wanting their own business.
    BidangUsaha, "bidang_usaha" {
        Barista => "Pelatihan Barista",
        Pastry => "Pelatihan Pastry",
        PerawatanAc => "Pelatihan Perawatan AC",
        Menjahit => "Pelatihan Menjahit",
        Lainnya => "Lainnya",
    }
);

/// Household member as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub family_id: i32,
    /// 1-based position of this member within the family.
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
    pub created_at: DateTime<Utc>,
}

impl Member {
    pub fn from_entity(entity: entity::family_member::Model) -> Self {
        Self {
            id: entity.id,
            family_id: entity.family_id,
            anggota_ke: entity.anggota_ke,
            nama: entity.nama,
            umur: entity.umur,
            hubungan: entity.hubungan,
            jenis_kelamin: entity.jenis_kelamin,
            status_perkawinan: entity.status_perkawinan,
            pendidikan: entity.pendidikan,
            kegiatan: entity.kegiatan,
            memiliki_pekerjaan: entity.memiliki_pekerjaan,
            status_pekerjaan_diinginkan: entity.status_pekerjaan_diinginkan,
            bidang_usaha: entity.bidang_usaha,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            anggota_ke: self.anggota_ke,
            nama: self.nama,
            umur: self.umur,
            hubungan: self.hubungan,
            jenis_kelamin: self.jenis_kelamin,
            status_perkawinan: self.status_perkawinan,
            pendidikan: self.pendidikan,
            kegiatan: self.kegiatan,
            memiliki_pekerjaan: self.memiliki_pekerjaan,
            status_pekerjaan_diinginkan: self.status_pekerjaan_diinginkan,
            bidang_usaha: self.bidang_usaha,
            created_at: self.created_at,
        }
    }
}

/// Validated member form, ready to be appended to a family.
///
/// The conditional employment fields are only populated when they apply: an employed
/// member never carries a desired job, and only `Berusaha Sendiri` carries a business
/// field.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub nama: String,
    pub umur: i32,
    pub hubungan: Hubungan,
    pub jenis_kelamin: JenisKelamin,
    pub status_perkawinan: StatusPerkawinan,
    pub pendidikan: Pendidikan,
    pub kegiatan: Kegiatan,
    pub memiliki_pekerjaan: MemilikiPekerjaan,
    pub status_pekerjaan_diinginkan: Option<StatusPekerjaanDiinginkan>,
    pub bidang_usaha: Option<BidangUsaha>,
}

/// Parameters for appending a member to the family with the given `keluarga_id`.
#[derive(Debug, Clone)]
pub struct AppendMemberParams {
    pub keluarga_id: String,
    pub member: NewMember,
}

impl AppendMemberParams {
    /// Validates a submitted member form.
    ///
    /// Presence is checked before any value is interpreted, so a form with several
    /// problems always reports missing fields first.
    ///
    /// # Returns
    /// - `Ok(AppendMemberParams)` - Form is complete and every value is in its set
    /// - `Err(AppError::BadRequest)` - Missing field, age below 15, unknown value, or a
    ///   missing conditional field
    pub fn from_dto(dto: MemberFormDto) -> Result<Self, AppError> {
        let keluarga_id = required_text(dto.family_id)?;
        let nama = required_text(dto.nama)?;
        let umur = required_number(dto.umur)?;
        let hubungan = required_text(dto.hubungan)?;
        let jenis_kelamin = required_text(dto.jenis_kelamin)?;
        let status_perkawinan = required_text(dto.status_perkawinan)?;
        let pendidikan = required_text(dto.pendidikan)?;
        let kegiatan = required_text(dto.kegiatan)?;
        let memiliki_pekerjaan = required_text(dto.memiliki_pekerjaan)?;

        if umur < MIN_MEMBER_AGE {
            return Err(AppError::BadRequest("Umur minimal 15 tahun".to_string()));
        }

        let memiliki_pekerjaan: MemilikiPekerjaan = memiliki_pekerjaan.parse()?;

        let (status_pekerjaan_diinginkan, bidang_usaha) = match memiliki_pekerjaan {
            MemilikiPekerjaan::Ya => (None, None),
            MemilikiPekerjaan::Tidak => {
                let desired: StatusPekerjaanDiinginkan =
                    required_conditional(dto.status_pekerjaan_diinginkan)?;
                let bidang = match desired {
                    StatusPekerjaanDiinginkan::BerusahaSendiri => {
                        Some(required_conditional::<BidangUsaha>(dto.bidang_usaha)?)
                    }
                    StatusPekerjaanDiinginkan::Buruh => None,
                };
                (Some(desired), bidang)
            }
        };

        Ok(Self {
            keluarga_id,
            member: NewMember {
                nama,
                umur,
                hubungan: hubungan.parse()?,
                jenis_kelamin: jenis_kelamin.parse()?,
                status_perkawinan: status_perkawinan.parse()?,
                pendidikan: pendidikan.parse()?,
                kegiatan: kegiatan.parse()?,
                memiliki_pekerjaan,
                status_pekerjaan_diinginkan,
                bidang_usaha,
            },
        })
    }
}

/// Result of appending a member, used to pick the next workflow step.
#[derive(Debug, Clone, PartialEq)]
pub struct AppendedMember {
    pub member: Member,
    /// Declared adults still to be recorded after this one.
    pub remaining: i32,
}

impl AppendedMember {
    /// Points the client at the next member form while adults remain, otherwise at
    /// the final form of family `keluarga_id`.
    pub fn into_response_dto(self, keluarga_id: &str) -> MemberSubmitResponseDto {
        if self.remaining > 0 {
            MemberSubmitResponseDto {
                success: true,
                message: "Data anggota berhasil disimpan. Lanjutkan ke anggota berikutnya."
                    .to_string(),
                continue_next_member: Some(true),
                remaining: Some(self.remaining),
                redirect_url: None,
            }
        } else {
            MemberSubmitResponseDto {
                success: true,
                message: "Semua data anggota berhasil disimpan. Lanjutkan ke halaman akhir."
                    .to_string(),
                continue_next_member: None,
                remaining: None,
                redirect_url: Some(format!("/final?family_id={}", keluarga_id)),
            }
        }
    }
}

/// Result of an append attempt, decided inside a single transaction.
#[derive(Debug, Clone, PartialEq)]
pub enum AppendMemberOutcome {
    Appended(AppendedMember),
    FamilyNotFound,
    /// Every declared adult has already been recorded.
    LimitReached,
}

/// Parses a conditional field, reporting its own field name when absent.
fn required_conditional<T: FormValue>(value: Option<String>) -> Result<T, AppError> {
    match non_blank(value) {
        Some(value) => value.parse(),
        None => Err(AppError::BadRequest(format!("{} harus diisi", T::FIELD))),
    }
}
