use sea_orm::DatabaseConnection;

use crate::server::{
    data::member::MemberRepository,
    error::AppError,
    model::member::{AppendMemberOutcome, AppendMemberParams, AppendedMember},
    service::family::FAMILY_NOT_FOUND_MESSAGE,
};

pub const MEMBER_LIMIT_MESSAGE: &str = "Sudah mencapai batas maksimal anggota keluarga";

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends the next member of a family.
    ///
    /// # Returns
    /// - `Ok(AppendedMember)` - Member stored, with the number of adults still to record
    /// - `Err(AppError::NotFound)` - Unknown family
    /// - `Err(AppError::BadRequest)` - Every declared adult is already recorded
    pub async fn append(&self, params: AppendMemberParams) -> Result<AppendedMember, AppError> {
        let repo = MemberRepository::new(self.db);

        match repo.append(params).await? {
            AppendMemberOutcome::Appended(appended) => Ok(appended),
            AppendMemberOutcome::FamilyNotFound => {
                Err(AppError::NotFound(FAMILY_NOT_FOUND_MESSAGE.to_string()))
            }
            AppendMemberOutcome::LimitReached => {
                Err(AppError::BadRequest(MEMBER_LIMIT_MESSAGE.to_string()))
            }
        }
    }
}
