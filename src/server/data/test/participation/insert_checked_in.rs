use super::*;

/// Tests the first check-in creates a participation.
///
/// Expected: Ok(true) and a CHECKIN row with entry time
#[tokio::test]
async fn inserts_first_participation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event, attendee) = factory::helpers::create_flash_event_with_attendee(db).await?;

    let repo = ParticipationRepository::new(db);
    assert!(
        repo.insert_checked_in(new_params(attendee.id, event.id), Utc::now())
            .await?
    );

    let stored = repo
        .find_by_user_and_event(attendee.id, event.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, ParticipationStatus::Checkin);
    assert!(stored.checkin_in.is_some());

    Ok(())
}

/// Tests the unique pair index turns a second insert into a no-op.
///
/// Expected: Ok(false) and still exactly one row for the pair
#[tokio::test]
async fn duplicate_pair_inserts_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event, attendee) = factory::helpers::create_flash_event_with_attendee(db).await?;

    let repo = ParticipationRepository::new(db);
    assert!(
        repo.insert_checked_in(new_params(attendee.id, event.id), Utc::now())
            .await?
    );
    assert!(
        !repo
            .insert_checked_in(new_params(attendee.id, event.id), Utc::now())
            .await?
    );

    let filter = crate::server::model::participation::ParticipationFilter {
        event_id: Some(event.id),
        user_id: Some(attendee.id),
    };
    assert_eq!(repo.get_all(filter).await?.len(), 1);

    Ok(())
}
