use super::*;

/// Tests an existing pending participation can check in.
///
/// Expected: Ok(true), status CHECKIN
#[tokio::test]
async fn checks_in_pending_participation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event, attendee) = factory::helpers::create_flash_event_with_attendee(db).await?;
    let participation = factory::create_participation(
        db,
        attendee.id,
        event.id,
        ParticipationStatus::Pending,
    )
    .await?;

    let repo = ParticipationRepository::new(db);
    assert!(repo.check_in(participation.id, Utc::now()).await?);

    let stored = repo.find_by_id(participation.id).await?.unwrap();
    assert_eq!(stored.status, ParticipationStatus::Checkin);

    Ok(())
}

/// Tests the guard refuses participations already inside or gone.
///
/// Expected: Ok(false) for CHECKIN and CHECKOUT
#[tokio::test]
async fn refuses_checked_in_and_checked_out() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParticipationRepository::new(db);
    for status in [ParticipationStatus::Checkin, ParticipationStatus::Checkout] {
        let (_, event, attendee) = factory::helpers::create_flash_event_with_attendee(db).await?;
        let participation =
            factory::create_participation(db, attendee.id, event.id, status).await?;

        assert!(!repo.check_in(participation.id, Utc::now()).await?);
    }

    Ok(())
}
