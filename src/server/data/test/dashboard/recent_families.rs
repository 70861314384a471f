use super::*;

/// Tests only the newest families are returned, newest first.
///
/// Expected: Ok with `limit` families ordered by created_at descending
#[tokio::test]
async fn returns_newest_families() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for hours_ago in [5, 1, 3] {
        factory::family::FamilyFactory::new(db)
            .keluarga_id(format!("KEL-{}", hours_ago))
            .created_at(now - Duration::hours(hours_ago))
            .build()
            .await?;
    }

    let recent = DashboardRepository::new(db).recent_families(2).await?;

    let ids: Vec<&str> = recent.iter().map(|f| f.keluarga_id.as_str()).collect();
    assert_eq!(ids, vec!["KEL-1", "KEL-3"]);

    Ok(())
}
