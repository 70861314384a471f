//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a family whose declared adults are all recorded, plus a completion record.
///
/// # Arguments
/// - `db` - Database connection
/// - `adults` - Declared and recorded number of members aged 15+
///
/// # Returns
/// - `Ok((family, members, completion))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_completed_family(
    db: &DatabaseConnection,
    adults: i32,
) -> Result<
    (
        entity::family::Model,
        Vec<entity::family_member::Model>,
        entity::survey_completion::Model,
    ),
    DbErr,
> {
    let family = crate::factory::family::FamilyFactory::new(db)
        .jumlah_anggota(adults.max(1))
        .jumlah_anggota_15plus(adults)
        .build()
        .await?;

    let mut members = Vec::new();
    for sequence in 1..=adults {
        members.push(crate::factory::family_member::create_member(db, family.id, sequence).await?);
    }

    let completion = crate::factory::survey_completion::create_completion(db, family.id).await?;

    Ok((family, members, completion))
}
