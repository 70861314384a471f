use super::*;

/// Tests deleting a family removes its members and completion record.
///
/// Expected: Ok(true) and no orphaned rows
#[tokio::test]
async fn deletes_family_with_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (family, _members, _completion) =
        factory::helpers::create_completed_family(db, 3).await?;
    let (other, _, _) = factory::helpers::create_completed_family(db, 1).await?;

    let deleted = FamilyRepository::new(db)
        .delete(&family.keluarga_id)
        .await?;
    assert!(deleted);

    let family_rows = entity::prelude::Family::find()
        .filter(entity::family::Column::Id.eq(family.id))
        .count(db)
        .await?;
    let member_rows = entity::prelude::FamilyMember::find()
        .filter(entity::family_member::Column::FamilyId.eq(family.id))
        .count(db)
        .await?;
    let completion_rows = entity::prelude::SurveyCompletion::find()
        .filter(entity::survey_completion::Column::FamilyId.eq(family.id))
        .count(db)
        .await?;

    assert_eq!(family_rows, 0);
    assert_eq!(member_rows, 0);
    assert_eq!(completion_rows, 0);

    // Other families are untouched
    let other_members = entity::prelude::FamilyMember::find()
        .filter(entity::family_member::Column::FamilyId.eq(other.id))
        .count(db)
        .await?;
    assert_eq!(other_members, 1);
    assert_eq!(entity::prelude::SurveyCompletion::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting an unknown family.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_family() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_family(db).await?;

    let deleted = FamilyRepository::new(db).delete("KEL-MISSING").await?;
    assert!(!deleted);
    assert_eq!(entity::prelude::Family::find().count(db).await?, 1);

    Ok(())
}
