use super::*;

/// Tests slots are reserved up to the maximum and no further.
///
/// Expected: two reservations succeed on a capacity of 2, the third fails
#[tokio::test]
async fn reserves_slots_up_to_max() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let event = factory::event::EventFactory::new(db, owner.id)
        .capacity_max(2)
        .build()
        .await?;

    let repo = EventRepository::new(db);
    assert!(repo.reserve_slot(event.id).await?);
    assert!(repo.reserve_slot(event.id).await?);
    assert!(!repo.reserve_slot(event.id).await?);

    let stored = repo.find_by_id(event.id).await?.unwrap();
    assert_eq!(stored.capacity_current, 2);

    Ok(())
}

/// Tests releasing never drives the counter below zero.
///
/// Expected: release on an empty event is Ok(false) and the counter stays 0
#[tokio::test]
async fn release_stops_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let event = factory::event::EventFactory::new(db, owner.id)
        .capacity_current(1)
        .build()
        .await?;

    let repo = EventRepository::new(db);
    assert!(repo.release_slot(event.id).await?);
    assert!(!repo.release_slot(event.id).await?);

    let stored = repo.find_by_id(event.id).await?.unwrap();
    assert_eq!(stored.capacity_current, 0);

    Ok(())
}

/// Tests entries are counted in the total.
///
/// Expected: capacity_total equals the number of recorded entries
#[tokio::test]
async fn records_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let event = factory::create_event(db, owner.id).await?;

    let repo = EventRepository::new(db);
    repo.record_entry(event.id).await?;
    repo.record_entry(event.id).await?;

    let stored = repo.find_by_id(event.id).await?.unwrap();
    assert_eq!(stored.capacity_total, 2);

    Ok(())
}

/// Tests flash events fall back to their id as entry code and can be found by it.
///
/// Expected: find_by_entry_code returns the event
#[tokio::test]
async fn finds_flash_event_by_entry_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let event = factory::create_flash_event(db, owner.id).await?;

    let repo = EventRepository::new(db);
    let found = repo.find_by_entry_code(&event.id.to_string()).await?.unwrap();
    assert_eq!(found.id, event.id);
    assert!(repo.find_by_entry_code("unknown").await?.is_none());

    Ok(())
}
