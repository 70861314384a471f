use super::*;

/// Tests creating a family stores every form field.
///
/// Expected: Ok with matching fields and equal timestamps
#[tokio::test]
async fn creates_family() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FamilyRepository::new(db);
    let family = repo
        .create(CreateFamilyParams {
            keluarga_id: "KEL-001002-20250801083000".to_string(),
            fields: fields(),
        })
        .await?;

    assert_eq!(family.keluarga_id, "KEL-001002-20250801083000");
    assert_eq!(family.rt, "001");
    assert_eq!(family.rw, "002");
    assert_eq!(family.jumlah_anggota, 4);
    assert_eq!(family.jumlah_anggota_15plus, 2);
    assert_eq!(family.created_at, family.updated_at);

    let stored = repo.get_by_keluarga_id("KEL-001002-20250801083000").await?;
    assert_eq!(stored, Some(family));

    Ok(())
}

/// Tests a duplicate generated id is rejected by the unique constraint.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_keluarga_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FamilyRepository::new(db);
    let params = CreateFamilyParams {
        keluarga_id: "KEL-001002-20250801083000".to_string(),
        fields: fields(),
    };
    repo.create(params.clone()).await?;

    let result = repo.create(params).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
