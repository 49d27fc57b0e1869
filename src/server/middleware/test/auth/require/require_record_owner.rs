use super::*;

/// Tests record access for the record owner, the event owner and a stranger.
///
/// Expected: owners Ok, stranger AccessDenied
#[tokio::test]
async fn record_owner_or_event_manager() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event_owner = factory::create_user(db).await?;
    let attendee = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let event = factory::create_event(db, event_owner.id).await?;

    let permission = Permission::RecordOwnerOrEventManager {
        owner_id: attendee.id,
        event_id: event.id,
    };

    for user_id in [attendee.id, event_owner.id] {
        let headers = headers_for(user_id);
        AuthGuard::new(db, SECRET, &headers)
            .require(std::slice::from_ref(&permission))
            .await?;
    }

    let headers = headers_for(stranger.id);
    let result = AuthGuard::new(db, SECRET, &headers)
        .require(std::slice::from_ref(&permission))
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
