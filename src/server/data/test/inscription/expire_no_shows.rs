use super::*;

/// Tests expiring unused inscriptions of an event that already ended.
///
/// Verifies that only never-attended, non-canceled inscriptions of finished events change.
///
/// Expected: 2 rows expired; attended, canceled and future-event inscriptions unchanged
#[tokio::test]
async fn expires_only_unused_inscriptions_of_ended_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let user = factory::create_user(db).await?;
    let ended = factory::event::EventFactory::new(db, user.id)
        .schedule(now - Duration::days(2), now - Duration::days(1))
        .build()
        .await?;
    let upcoming = factory::create_event(db, user.id).await?;

    let pending = factory::create_inscription(db, user.id, ended.id).await?;
    let confirmed = factory::inscription::InscriptionFactory::new(db, user.id, ended.id)
        .status(InscriptionStatus::Confirmed)
        .build()
        .await?;
    let attended = factory::inscription::InscriptionFactory::new(db, user.id, ended.id)
        .status(InscriptionStatus::Used)
        .participation_status(ParticipationStatus::Checkout)
        .build()
        .await?;
    let canceled = factory::inscription::InscriptionFactory::new(db, user.id, ended.id)
        .status(InscriptionStatus::Canceled)
        .build()
        .await?;
    let future = factory::create_inscription(db, user.id, upcoming.id).await?;

    let repo = InscriptionRepository::new(db);
    assert_eq!(repo.expire_no_shows(now).await?, 2);

    for id in [pending.id, confirmed.id] {
        let stored = repo.find_by_id(id).await?.unwrap();
        assert_eq!(stored.status, InscriptionStatus::Expired);
        assert_eq!(stored.participation_status, ParticipationStatus::NoShow);
    }

    let stored = repo.find_by_id(attended.id).await?.unwrap();
    assert_eq!(stored.status, InscriptionStatus::Used);
    let stored = repo.find_by_id(canceled.id).await?.unwrap();
    assert_eq!(stored.status, InscriptionStatus::Canceled);
    let stored = repo.find_by_id(future.id).await?.unwrap();
    assert_eq!(stored.status, InscriptionStatus::Pending);

    // Idempotent
    assert_eq!(repo.expire_no_shows(now).await?, 0);

    Ok(())
}
