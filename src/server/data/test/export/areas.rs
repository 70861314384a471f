use super::*;

/// Tests distinct areas are listed once each, in order.
///
/// Expected: Ok with two areas
#[tokio::test]
async fn lists_distinct_areas() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let areas = ExportRepository::new(db).areas().await?;

    assert_eq!(areas.len(), 2);
    assert_eq!(
        (areas[0].rt.as_str(), areas[0].dusun.as_str()),
        ("001", "Krajan")
    );
    assert_eq!(
        (areas[1].rt.as_str(), areas[1].dusun.as_str()),
        ("002", "Sukamaju")
    );

    Ok(())
}
