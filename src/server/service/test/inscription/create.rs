use super::*;

/// Tests registering oneself copies the user's data and reserves a slot.
///
/// Expected: PENDING/PENDING inscription, participant from the user, capacity current 1
#[tokio::test]
async fn registers_caller_and_reserves_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let event = factory::create_event(db, user.id).await?;

    let inscription = InscriptionService::new(db)
        .create(user.id, for_self(event.id))
        .await?;

    assert_eq!(inscription.user_id, user.id);
    assert_eq!(inscription.status, InscriptionStatus::Pending);
    assert_eq!(inscription.participation_status, ParticipationStatus::Pending);
    assert_eq!(inscription.participant.email, user.email);
    assert_eq!(inscription.participant.document, user.cpf);

    let event = EventRepository::new(db).find_by_id(event.id).await?.unwrap();
    assert_eq!(event.capacity_current, 1);

    Ok(())
}

/// Tests registering another person without all participant fields.
///
/// Expected: BadRequest and no slot reserved
#[tokio::test]
async fn for_another_one_requires_all_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let event = factory::create_event(db, user.id).await?;

    let dto = CreateInscriptionDto {
        for_another_one: true,
        participants: ParticipantInputDto {
            name: Some("Joao".to_string()),
            email: Some("joao@example.com".to_string()),
            date_of_birth: None,
            document: Some("111.222.333-44".to_string()),
        },
        ..for_self(event.id)
    };
    let result = InscriptionService::new(db).create(user.id, dto).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let event = EventRepository::new(db).find_by_id(event.id).await?.unwrap();
    assert_eq!(event.capacity_current, 0);

    Ok(())
}

/// Tests registering when every slot is taken.
///
/// Expected: Conflict
#[tokio::test]
async fn full_event_is_a_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let event = factory::event::EventFactory::new(db, user.id)
        .capacity_max(1)
        .capacity_current(1)
        .build()
        .await?;

    let result = InscriptionService::new(db)
        .create(user.id, for_self(event.id))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests flash events refuse inscriptions.
///
/// Expected: BadRequest
#[tokio::test]
async fn flash_event_refuses_inscriptions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let event = factory::event::EventFactory::new(db, user.id)
        .event_type(EventType::Flash)
        .build()
        .await?;

    let result = InscriptionService::new(db)
        .create(user.id, for_self(event.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests registering for an unknown event or on behalf of an unknown user.
///
/// Expected: NotFound in both cases
#[tokio::test]
async fn unknown_event_or_user_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let event = factory::create_event(db, user.id).await?;
    let service = InscriptionService::new(db);

    let result = service.create(user.id, for_self(Uuid::new_v4())).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let dto = CreateInscriptionDto {
        user_id: Some(Uuid::new_v4()),
        ..for_self(event.id)
    };
    let result = service.create(user.id, dto).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
