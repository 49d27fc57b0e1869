use super::*;

/// Tests checking out after a check-in.
///
/// Expected: Ok(true), presence CHECKOUT, exit time set
#[tokio::test]
async fn checks_out_after_check_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, inscription) = factory::helpers::create_inscription_with_dependencies(db).await?;

    let repo = InscriptionRepository::new(db);
    assert!(repo.check_in(inscription.id, Utc::now()).await?);
    assert!(repo.check_out(inscription.id, Utc::now()).await?);

    let stored = repo.find_by_id(inscription.id).await?.unwrap();
    assert_eq!(stored.participation_status, ParticipationStatus::Checkout);
    assert!(stored.checkin_out.is_some());

    Ok(())
}

/// Tests checkout is unreachable from PENDING presence.
///
/// Expected: Ok(false), presence stays PENDING
#[tokio::test]
async fn refuses_checkout_without_check_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, inscription) = factory::helpers::create_inscription_with_dependencies(db).await?;

    let repo = InscriptionRepository::new(db);
    assert!(!repo.check_out(inscription.id, Utc::now()).await?);

    let stored = repo.find_by_id(inscription.id).await?.unwrap();
    assert_eq!(stored.participation_status, ParticipationStatus::Pending);
    assert!(stored.checkin_out.is_none());

    Ok(())
}

/// Tests a checked-in inscription that was canceled afterwards cannot check out.
///
/// Expected: Ok(false)
#[tokio::test]
async fn refuses_checkout_of_canceled_inscription() -> Result<(), DbErr> {
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
        .participation_status(ParticipationStatus::Checkin)
        .checkin_in(Utc::now())
        .build()
        .await?;

    let repo = InscriptionRepository::new(db);
    assert!(!repo.check_out(inscription.id, Utc::now()).await?);

    Ok(())
}

/// Tests a repeated checkout.
///
/// Expected: second call Ok(false)
#[tokio::test]
async fn second_checkout_affects_no_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, inscription) = factory::helpers::create_inscription_with_dependencies(db).await?;

    let repo = InscriptionRepository::new(db);
    assert!(repo.check_in(inscription.id, Utc::now()).await?);
    assert!(repo.check_out(inscription.id, Utc::now()).await?);
    assert!(!repo.check_out(inscription.id, Utc::now()).await?);

    Ok(())
}
