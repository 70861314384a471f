use super::*;

/// Tests the first submission inserts a completion record.
///
/// Expected: Ok with a stored record for the family
#[tokio::test]
async fn inserts_completion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let family = factory::create_family(db).await?;

    let repo = SurveyCompletionRepository::new(db);
    let completion = repo
        .upsert(family.id, params(&family.keluarga_id, None))
        .await?;

    assert_eq!(completion.family_id, family.id);
    assert_eq!(completion.nama_pencacah, "Rina");
    assert_eq!(completion.catatan, None);
    assert_eq!(repo.get_by_family_id(family.id).await?, Some(completion));

    Ok(())
}

/// Tests a second submission overwrites the existing record in place.
///
/// Expected: Ok with the same id, new values, and still a single row
#[tokio::test]
async fn overwrites_existing_completion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let family = factory::create_family(db).await?;
    let existing = factory::create_completion(db, family.id).await?;

    let mut resubmitted = params(&family.keluarga_id, Some("Rumah kosong saat kunjungan pertama"));
    resubmitted.nama_pencacah = "Dewi".to_string();

    let completion = SurveyCompletionRepository::new(db)
        .upsert(family.id, resubmitted)
        .await?;

    assert_eq!(completion.id, existing.id);
    assert_eq!(completion.nama_pencacah, "Dewi");
    assert_eq!(
        completion.catatan.as_deref(),
        Some("Rumah kosong saat kunjungan pertama")
    );
    assert_eq!(completion.created_at, existing.created_at);
    assert_eq!(
        entity::prelude::SurveyCompletion::find().count(db).await?,
        1
    );

    Ok(())
}
