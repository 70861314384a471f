use super::*;

/// Tests filtering by RT returns only families in that RT.
///
/// Expected: Ok with the two RT 001 families only
#[tokio::test]
async fn filters_families_by_rt() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let families = ExportRepository::new(db).families(&rt("001")).await?;

    assert_eq!(families.len(), 2);
    assert!(families.iter().all(|f| f.family.rt == "001"));
    assert!(families.iter().all(|f| f.member_count == 1));

    let completed: Vec<&str> = families
        .iter()
        .filter(|f| f.completion.is_some())
        .map(|f| f.family.keluarga_id.as_str())
        .collect();
    assert_eq!(completed, vec!["KEL-001001-A"]);

    Ok(())
}

/// Tests combined filters narrow the result.
///
/// Expected: Ok(empty) when no family matches every filter
#[tokio::test]
async fn combines_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let filter = AreaFilter {
        rt: Some("001".to_string()),
        rw: None,
        dusun: Some("Sukamaju".to_string()),
    };
    let families = ExportRepository::new(db).families(&filter).await?;

    assert!(families.is_empty());

    Ok(())
}

/// Tests no filter returns every family.
///
/// Expected: Ok with all three families
#[tokio::test]
async fn returns_all_without_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let families = ExportRepository::new(db)
        .families(&AreaFilter::default())
        .await?;

    assert_eq!(families.len(), 3);

    Ok(())
}
