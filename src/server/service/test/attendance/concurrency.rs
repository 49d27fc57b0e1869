use super::*;

const RACERS: usize = 16;

/// Tests concurrent entries with the same inscription.
///
/// Expected: exactly one success, every other attempt InvalidTransition(AlreadyCheckedIn),
/// event total incremented once
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_inscription_entries_succeed_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let (user, event, inscription) =
        factory::helpers::create_inscription_with_dependencies(&db).await?;
    let code = inscription.id.to_string();
    let user_id = user.id;

    let handles: Vec<_> = (0..RACERS)
        .map(|_| {
            let db = db.clone();
            let code = code.clone();
            tokio::spawn(async move {
                AttendanceService::new(&db)
                    .validate_entry(&code, user_id)
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(AppError::InvalidTransition(TransitionError::AlreadyCheckedIn)) => {}
            Err(other) => panic!("unexpected error: {}", other),
        }
    }
    assert_eq!(successes, 1);

    let event = crate::server::data::event::EventRepository::new(&db)
        .find_by_id(event.id)
        .await?
        .unwrap();
    assert_eq!(event.capacity_total, 1);

    Ok(())
}

/// Tests concurrent first entries of one attendee at a flash event.
///
/// Expected: exactly one success and a single participation row
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_flash_entries_create_one_participation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let (_, event, attendee) = factory::helpers::create_flash_event_with_attendee(&db).await?;
    let code = event.id.to_string();
    let attendee_id = attendee.id;

    let handles: Vec<_> = (0..RACERS)
        .map(|_| {
            let db = db.clone();
            let code = code.clone();
            tokio::spawn(async move {
                AttendanceService::new(&db)
                    .validate_entry(&code, attendee_id)
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(AppError::InvalidTransition(TransitionError::AlreadyCheckedIn)) => {}
            Err(other) => panic!("unexpected error: {}", other),
        }
    }
    assert_eq!(successes, 1);

    let rows = crate::server::data::participation::ParticipationRepository::new(&db)
        .get_all(crate::server::model::participation::ParticipationFilter {
            event_id: Some(event.id),
            user_id: Some(attendee_id),
        })
        .await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}
