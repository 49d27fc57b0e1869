use super::*;

/// Tests checking in a pending inscription.
///
/// Verifies that the guarded update consumes the ticket and records presence.
///
/// Expected: Ok(true), status USED, presence CHECKIN, entry time set
#[tokio::test]
async fn checks_in_pending_inscription() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, inscription) = factory::helpers::create_inscription_with_dependencies(db).await?;

    let repo = InscriptionRepository::new(db);
    let now = Utc::now();
    assert!(repo.check_in(inscription.id, now).await?);

    let stored = repo.find_by_id(inscription.id).await?.unwrap();
    assert_eq!(stored.status, InscriptionStatus::Used);
    assert_eq!(stored.participation_status, ParticipationStatus::Checkin);
    assert!(stored.checkin_in.is_some());
    assert!(stored.checkin_out.is_none());

    Ok(())
}

/// Tests checking in a confirmed inscription.
///
/// Expected: Ok(true)
#[tokio::test]
async fn checks_in_confirmed_inscription() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let event = factory::create_event(db, user.id).await?;
    let inscription = factory::inscription::InscriptionFactory::new(db, user.id, event.id)
        .status(InscriptionStatus::Confirmed)
        .build()
        .await?;

    let repo = InscriptionRepository::new(db);
    assert!(repo.check_in(inscription.id, Utc::now()).await?);

    Ok(())
}

/// Tests the guard refuses a second check-in.
///
/// Expected: first call Ok(true), second Ok(false), entry time unchanged
#[tokio::test]
async fn second_check_in_affects_no_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, inscription) = factory::helpers::create_inscription_with_dependencies(db).await?;

    let repo = InscriptionRepository::new(db);
    let first = Utc::now();
    assert!(repo.check_in(inscription.id, first).await?);
    assert!(!repo
        .check_in(inscription.id, first + Duration::minutes(5))
        .await?);

    let stored = repo.find_by_id(inscription.id).await?.unwrap();
    assert_eq!(stored.checkin_in.map(|t| t.timestamp()), Some(first.timestamp()));

    Ok(())
}

/// Tests the guard refuses canceled inscriptions.
///
/// Expected: Ok(false), status stays CANCELED
#[tokio::test]
async fn refuses_canceled_inscription() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let event = factory::create_event(db, user.id).await?;
    let inscription = factory::inscription::InscriptionFactory::new(db, user.id, event.id)
        .status(InscriptionStatus::Canceled)
        .build()
        .await?;

    let repo = InscriptionRepository::new(db);
    assert!(!repo.check_in(inscription.id, Utc::now()).await?);

    let stored = repo.find_by_id(inscription.id).await?.unwrap();
    assert_eq!(stored.status, InscriptionStatus::Canceled);
    assert_eq!(stored.participation_status, ParticipationStatus::Pending);

    Ok(())
}

/// Tests checking in an unknown id.
///
/// Expected: Ok(false)
#[tokio::test]
async fn unknown_id_affects_no_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InscriptionRepository::new(db);
    assert!(!repo.check_in(uuid::Uuid::new_v4(), Utc::now()).await?);

    Ok(())
}
