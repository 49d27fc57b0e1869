use super::*;

/// Tests exit after entry, then a repeated exit.
///
/// Expected: CHECKOUT with exit stamped, then InvalidTransition(AlreadyCheckedOut)
#[tokio::test]
async fn exit_after_entry_then_repeat() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, inscription) = factory::helpers::create_inscription_with_dependencies(db).await?;
    let service = AttendanceService::new(db);
    let code = inscription.id.to_string();

    service.validate_entry(&code, user.id).await?;
    let inscription = inscription_of(service.validate_exit(&code, user.id).await?);

    assert_eq!(inscription.participation_status, ParticipationStatus::Checkout);
    assert!(inscription.checkin_out.is_some());

    let repeat = service.validate_exit(&code, user.id).await;
    assert!(matches!(
        repeat,
        Err(AppError::InvalidTransition(TransitionError::AlreadyCheckedOut))
    ));

    Ok(())
}

/// Tests exit without a prior entry.
///
/// Expected: InvalidTransition(NotCheckedIn)
#[tokio::test]
async fn exit_before_entry_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, inscription) = factory::helpers::create_inscription_with_dependencies(db).await?;

    let result = AttendanceService::new(db)
        .validate_exit(&inscription.id.to_string(), user.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::InvalidTransition(TransitionError::NotCheckedIn))
    ));

    Ok(())
}

/// Tests a checked-in inscription that is canceled can no longer check out.
///
/// Expected: InvalidTransition(Canceled), presence left at CHECKIN
#[tokio::test]
async fn canceled_after_entry_cannot_exit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, inscription) = factory::helpers::create_inscription_with_dependencies(db).await?;
    let service = AttendanceService::new(db);
    let code = inscription.id.to_string();

    service.validate_entry(&code, user.id).await?;
    InscriptionService::new(db).cancel(inscription.id).await?;

    let result = service.validate_exit(&code, user.id).await;
    assert!(matches!(
        result,
        Err(AppError::InvalidTransition(TransitionError::Canceled))
    ));

    let stored = InscriptionService::new(db).get(inscription.id).await?;
    assert_eq!(stored.status, InscriptionStatus::Canceled);
    assert_eq!(stored.participation_status, ParticipationStatus::Checkin);
    assert!(stored.checkin_out.is_none());

    Ok(())
}
