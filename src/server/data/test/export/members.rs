use super::*;

/// Tests filtering by RT returns only members of families in that RT.
///
/// Expected: Ok with two members ordered by keluarga_id
#[tokio::test]
async fn filters_members_by_rt() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let members = ExportRepository::new(db).members(&rt("001")).await?;

    let ids: Vec<&str> = members.iter().map(|m| m.keluarga_id.as_str()).collect();
    assert_eq!(ids, vec!["KEL-001001-A", "KEL-001001-B"]);
    assert!(members.iter().all(|m| m.rt == "001" && m.dusun == "Krajan"));

    Ok(())
}

/// Tests filtering by dusun.
///
/// Expected: Ok with the single Sukamaju member
#[tokio::test]
async fn filters_members_by_dusun() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let filter = AreaFilter {
        dusun: Some("Sukamaju".to_string()),
        ..Default::default()
    };
    let members = ExportRepository::new(db).members(&filter).await?;

    assert_eq!(members.len(), 1);
    assert_eq!(members[0].keluarga_id, "KEL-002001-C");
    assert_eq!(members[0].member.anggota_ke, 1);

    Ok(())
}
