use super::*;

/// Tests the owner and admin organizers manage the event, other levels do not.
///
/// Expected: owner and admin Ok, reception AccessDenied
#[tokio::test]
async fn owner_and_admin_organizer_manage_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let admin = factory::create_user(db).await?;
    let reception = factory::create_user(db).await?;
    let event = factory::create_event(db, owner.id).await?;

    let organizers = crate::server::data::organizer::OrganizerRepository::new(db);
    organizers
        .add(event.id, admin.id, OrganizerLevel::Admin)
        .await?;
    organizers
        .add(event.id, reception.id, OrganizerLevel::Reception)
        .await?;

    for user_id in [owner.id, admin.id] {
        let headers = headers_for(user_id);
        AuthGuard::new(db, SECRET, &headers)
            .require(&[Permission::EventManage(event.id)])
            .await?;
    }

    let headers = headers_for(reception.id);
    let result = AuthGuard::new(db, SECRET, &headers)
        .require(&[Permission::EventManage(event.id)])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests only the owner passes an ownership check, even against admin organizers.
///
/// Expected: admin organizer AccessDenied
#[tokio::test]
async fn admin_organizer_is_not_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let admin = factory::create_user(db).await?;
    let event = factory::create_event(db, owner.id).await?;
    crate::server::data::organizer::OrganizerRepository::new(db)
        .add(event.id, admin.id, OrganizerLevel::Admin)
        .await?;

    let headers = headers_for(admin.id);
    let result = AuthGuard::new(db, SECRET, &headers)
        .require(&[Permission::EventOwner(event.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a permission on an unknown event.
///
/// Expected: NotFound
#[tokio::test]
async fn unknown_event_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let headers = headers_for(user.id);
    let result = AuthGuard::new(db, SECRET, &headers)
        .require(&[Permission::EventManage(Uuid::new_v4())])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
