use crate::server::{data::export::ExportRepository, model::export::AreaFilter};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod areas;
mod families;
mod members;

/// Seeds two families in RT 001 / Krajan and one in RT 002 / Sukamaju, each with one
/// member; the first RT 001 family is completed.
async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    let first = factory::family::FamilyFactory::new(db)
        .keluarga_id("KEL-001001-A")
        .area("001", "001", "Krajan")
        .build()
        .await?;
    factory::create_member(db, first.id, 1).await?;
    factory::create_completion(db, first.id).await?;

    let second = factory::family::FamilyFactory::new(db)
        .keluarga_id("KEL-001001-B")
        .area("001", "001", "Krajan")
        .build()
        .await?;
    factory::create_member(db, second.id, 1).await?;

    let third = factory::family::FamilyFactory::new(db)
        .keluarga_id("KEL-002001-C")
        .area("002", "001", "Sukamaju")
        .build()
        .await?;
    factory::create_member(db, third.id, 1).await?;

    Ok(())
}

fn rt(value: &str) -> AreaFilter {
    AreaFilter {
        rt: Some(value.to_string()),
        ..Default::default()
    }
}
