use super::*;

/// Tests an organizer's level changes and removal is reported once.
///
/// Expected: level Admin after update, remove Ok, second remove NotFound
#[tokio::test]
async fn update_level_then_remove() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let helper = factory::create_user(db).await?;
    let event = factory::create_event(db, owner.id).await?;
    let service = OrganizerService::new(db);
    service
        .add(event.id, helper.id, OrganizerLevel::Reception)
        .await?;

    let updated = service
        .update_level(event.id, helper.id, OrganizerLevel::Admin)
        .await?;
    assert_eq!(updated.level, OrganizerLevel::Admin);

    service.remove(event.id, helper.id).await?;
    let result = service.remove(event.id, helper.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests updating someone who is not an organizer.
///
/// Expected: NotFound
#[tokio::test]
async fn update_unknown_organizer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let event = factory::create_event(db, owner.id).await?;

    let result = OrganizerService::new(db)
        .update_level(event.id, Uuid::new_v4(), OrganizerLevel::Admin)
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
