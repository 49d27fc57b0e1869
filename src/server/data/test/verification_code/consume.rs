use super::*;

/// Tests a matching unexpired code is accepted once.
///
/// Expected: first consume Ok(true), second Ok(false)
#[tokio::test]
async fn consumes_valid_code_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VerificationCodeRepository::new(db);
    let now = Utc::now();
    repo.upsert("jane@example.com", "X1Y2Z", now + Duration::minutes(5))
        .await?;

    assert!(repo.consume("jane@example.com", "X1Y2Z", now).await?);
    assert!(!repo.consume("jane@example.com", "X1Y2Z", now).await?);

    Ok(())
}

/// Tests a wrong code leaves the stored code intact.
///
/// Expected: Ok(false) and the code is still present
#[tokio::test]
async fn rejects_wrong_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VerificationCodeRepository::new(db);
    let now = Utc::now();
    repo.upsert("jane@example.com", "X1Y2Z", now + Duration::minutes(5))
        .await?;

    assert!(!repo.consume("jane@example.com", "WRONG", now).await?);
    assert!(repo.find("jane@example.com").await?.is_some());

    Ok(())
}

/// Tests an expired code cannot be consumed.
///
/// Expected: Ok(false)
#[tokio::test]
async fn rejects_expired_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VerificationCodeRepository::new(db);
    let now = Utc::now();
    repo.upsert("jane@example.com", "X1Y2Z", now - Duration::minutes(1))
        .await?;

    assert!(!repo.consume("jane@example.com", "X1Y2Z", now).await?);

    Ok(())
}
