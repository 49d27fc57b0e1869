use super::*;

/// Tests only the author may delete a review.
///
/// Expected: AccessDenied for another user, Ok for the author, then NotFound
#[tokio::test]
async fn only_author_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .with_table(entity::prelude::Review)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let event = factory::create_event(db, author.id).await?;
    let service = ReviewService::new(db);
    let review = service
        .create(params(author.id, event.id, ReviewableType::Event))
        .await?;

    let result = service.delete(other.id, review.id).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    service.delete(author.id, review.id).await?;

    let result = service.delete(author.id, review.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
