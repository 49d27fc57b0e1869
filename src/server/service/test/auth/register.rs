use super::*;

/// Tests the full registration flow with an issued code.
///
/// Expected: verified user created and the code consumed
#[tokio::test]
async fn registers_with_issued_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = EmailService::new();
    let service = AuthService::new(db, SECRET, &mailer);

    let code = issued_code(&service, db, "jane@example.com").await;
    let user = service
        .register(register_dto("jane@example.com", &code))
        .await?;

    assert_eq!(user.email, "jane@example.com");
    assert!(user.email_verified);
    assert!(VerificationCodeRepository::new(db)
        .find("jane@example.com")
        .await?
        .is_none());

    Ok(())
}

/// Tests registration with a wrong code.
///
/// Expected: BadRequest and no user created
#[tokio::test]
async fn wrong_code_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = EmailService::new();
    let service = AuthService::new(db, SECRET, &mailer);

    issued_code(&service, db, "jane@example.com").await;
    let result = service
        .register(register_dto("jane@example.com", "WRONG"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(!UserRepository::new(db).email_exists("jane@example.com").await?);

    Ok(())
}

/// Tests a weak password fails before the code is consumed.
///
/// Expected: BadRequest, code still stored
#[tokio::test]
async fn weak_password_keeps_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = EmailService::new();
    let service = AuthService::new(db, SECRET, &mailer);

    let code = issued_code(&service, db, "jane@example.com").await;
    let dto = RegisterDto {
        password: "short".to_string(),
        ..register_dto("jane@example.com", &code)
    };

    assert!(matches!(
        service.register(dto).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(VerificationCodeRepository::new(db)
        .find("jane@example.com")
        .await?
        .is_some());

    Ok(())
}

/// Tests requesting a code for an already registered email.
///
/// Expected: Conflict
#[tokio::test]
async fn code_for_registered_email_is_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = EmailService::new();
    let service = AuthService::new(db, SECRET, &mailer);

    let code = issued_code(&service, db, "jane@example.com").await;
    service
        .register(register_dto("jane@example.com", &code))
        .await?;

    let result = service.request_verification_code("Jane@Example.com").await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
