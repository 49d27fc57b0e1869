use super::*;

/// Tests email and cpf lookups used for duplicate detection.
///
/// Expected: true for stored values, false otherwise
#[tokio::test]
async fn detects_existing_email_and_cpf() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .cpf("123.456.789-00")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(repo.email_exists("taken@example.com").await?);
    assert!(!repo.email_exists("free@example.com").await?);
    assert!(repo.cpf_exists("123.456.789-00").await?);
    assert!(!repo.cpf_exists("999.999.999-99").await?);

    Ok(())
}
