use super::*;

/// Tests a second event cannot reuse an entry QR code, so scanning it reaches one event.
///
/// Expected: second create Conflict, check-in through the code lands on the first event
#[tokio::test]
async fn entry_code_is_unique_across_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let attendee = factory::create_user(db).await?;
    let service = EventService::new(db);

    let morning = service
        .create(flash_params(owner.id, "Morning", Some("HALL-A")))
        .await?;
    let evening = service
        .create(flash_params(owner.id, "Evening", Some("HALL-A")))
        .await;
    assert!(matches!(evening, Err(AppError::Conflict(_))));
    assert_eq!(service.get_all().await?.len(), 1);

    let outcome = AttendanceService::new(db)
        .validate_entry("HALL-A", attendee.id)
        .await?;
    let AttendanceOutcome::Participation(participation) = outcome else {
        panic!("expected a participation outcome");
    };
    assert_eq!(participation.event_id, morning.id);

    Ok(())
}

/// Tests flash events without a custom code get their own id as code, and several
/// standard events may leave the code empty.
///
/// Expected: all creates succeed, flash code equals the event id
#[tokio::test]
async fn default_entry_codes_do_not_collide() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let service = EventService::new(db);

    let first = service.create(flash_params(owner.id, "First", None)).await?;
    let second = service.create(flash_params(owner.id, "Second", None)).await?;
    assert_eq!(first.entry_qr_code, Some(first.id.to_string()));
    assert_eq!(second.entry_qr_code, Some(second.id.to_string()));

    factory::create_event(db, owner.id).await?;
    factory::create_event(db, owner.id).await?;

    Ok(())
}
