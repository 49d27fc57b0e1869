use super::*;

/// Tests cancel frees the slot and a second cancel is refused.
///
/// Expected: CANCELED, capacity back to 0, then InvalidTransition(AlreadyCanceled)
#[tokio::test]
async fn cancel_releases_slot_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let event = factory::create_event(db, user.id).await?;
    let service = InscriptionService::new(db);
    let inscription = service.create(user.id, for_self(event.id)).await?;

    let canceled = service.cancel(inscription.id).await?;
    assert_eq!(canceled.status, InscriptionStatus::Canceled);

    let repeat = service.cancel(inscription.id).await;
    assert!(matches!(
        repeat,
        Err(AppError::InvalidTransition(TransitionError::AlreadyCanceled))
    ));

    let event = EventRepository::new(db).find_by_id(event.id).await?.unwrap();
    assert_eq!(event.capacity_current, 0);

    Ok(())
}

/// Tests deleting a canceled inscription does not release a second slot.
///
/// Expected: capacity stays at the one slot held by the other inscription
#[tokio::test]
async fn deleting_canceled_inscription_keeps_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let event = factory::create_event(db, user.id).await?;
    let service = InscriptionService::new(db);

    let first = service.create(user.id, for_self(event.id)).await?;
    service.create(other.id, for_self(event.id)).await?;

    service.cancel(first.id).await?;
    service.delete(first.id).await?;

    let event = EventRepository::new(db).find_by_id(event.id).await?.unwrap();
    assert_eq!(event.capacity_current, 1);

    Ok(())
}

/// Tests cancel of an unknown inscription.
///
/// Expected: NotFound
#[tokio::test]
async fn cancel_unknown_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = InscriptionService::new(db).cancel(Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
