use super::*;

/// Tests requesting a new code replaces the previous one for the same email.
///
/// Expected: only the latest code is stored
#[tokio::test]
async fn replaces_previous_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VerificationCodeRepository::new(db);
    let expires_at = Utc::now() + Duration::minutes(5);
    repo.upsert("jane@example.com", "AAAAA", expires_at).await?;
    repo.upsert("jane@example.com", "BBBBB", expires_at).await?;

    let stored = repo.find("jane@example.com").await?.unwrap();
    assert_eq!(stored.code, "BBBBB");

    Ok(())
}
