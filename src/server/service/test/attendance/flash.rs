use super::*;

/// Tests the first flash entry creates a checked-in participation and a repeat is refused.
///
/// Expected: CHECKIN participation, then InvalidTransition(AlreadyCheckedIn)
#[tokio::test]
async fn first_entry_creates_participation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event, attendee) = factory::helpers::create_flash_event_with_attendee(db).await?;
    let service = AttendanceService::new(db);
    let code = event.id.to_string();

    let participation = participation_of(service.validate_entry(&code, attendee.id).await?);
    assert_eq!(participation.status, ParticipationStatus::Checkin);
    assert_eq!(participation.user_id, attendee.id);
    assert_eq!(participation.email, attendee.email);
    assert!(participation.checkin_in.is_some());

    let repeat = service.validate_entry(&code, attendee.id).await;
    assert!(matches!(
        repeat,
        Err(AppError::InvalidTransition(TransitionError::AlreadyCheckedIn))
    ));

    Ok(())
}

/// Tests the entry QR code resolves to the flash event.
///
/// Expected: participation created through the QR code
#[tokio::test]
async fn entry_by_qr_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event, attendee) = factory::helpers::create_flash_event_with_attendee(db).await?;
    let qr_code = event.entry_qr_code.clone().unwrap();

    let participation = participation_of(
        AttendanceService::new(db)
            .validate_entry(&qr_code, attendee.id)
            .await?,
    );

    assert_eq!(participation.event_id, event.id);

    Ok(())
}

/// Tests a flash exit without any participation.
///
/// Expected: InvalidTransition(NotCheckedIn)
#[tokio::test]
async fn exit_without_participation_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event, attendee) = factory::helpers::create_flash_event_with_attendee(db).await?;

    let result = AttendanceService::new(db)
        .validate_exit(&event.id.to_string(), attendee.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::InvalidTransition(TransitionError::NotCheckedIn))
    ));

    Ok(())
}

/// Tests a no-show participation can still check in.
///
/// Expected: CHECKIN
#[tokio::test]
async fn no_show_participation_can_enter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event, attendee) = factory::helpers::create_flash_event_with_attendee(db).await?;
    factory::create_participation(db, attendee.id, event.id, ParticipationStatus::NoShow).await?;

    let participation = participation_of(
        AttendanceService::new(db)
            .validate_entry(&event.id.to_string(), attendee.id)
            .await?,
    );

    assert_eq!(participation.status, ParticipationStatus::Checkin);

    Ok(())
}

/// Tests entering a flash event with an unknown attendee.
///
/// Expected: NotFound
#[tokio::test]
async fn unknown_attendee_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let event = factory::event::EventFactory::new(db, owner.id)
        .event_type(EventType::Flash)
        .build()
        .await?;

    let result = AttendanceService::new(db)
        .validate_entry(&event.id.to_string(), uuid::Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a flash exit after entry, a repeated exit and a re-entry after leaving.
///
/// Expected: CHECKOUT with exit stamped, then AlreadyCheckedOut for both exit and entry
#[tokio::test]
async fn exit_after_entry_is_final() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event, attendee) = factory::helpers::create_flash_event_with_attendee(db).await?;
    let service = AttendanceService::new(db);
    let code = event.id.to_string();

    let entered = participation_of(service.validate_entry(&code, attendee.id).await?);
    let left = participation_of(service.validate_exit(&code, attendee.id).await?);
    assert_eq!(left.id, entered.id);
    assert_eq!(left.status, ParticipationStatus::Checkout);
    assert_eq!(left.checkin_in, entered.checkin_in);
    assert!(left.checkin_out.is_some());

    let repeat = service.validate_exit(&code, attendee.id).await;
    assert!(matches!(
        repeat,
        Err(AppError::InvalidTransition(TransitionError::AlreadyCheckedOut))
    ));

    let reentry = service.validate_entry(&code, attendee.id).await;
    assert!(matches!(
        reentry,
        Err(AppError::InvalidTransition(TransitionError::AlreadyCheckedOut))
    ));

    Ok(())
}
