use super::*;

/// Tests login with the registered password.
///
/// Expected: token whose subject is the user id
#[tokio::test]
async fn login_issues_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = EmailService::new();
    let service = AuthService::new(db, SECRET, &mailer);

    let code = issued_code(&service, db, "jane@example.com").await;
    let registered = service
        .register(register_dto("jane@example.com", &code))
        .await?;

    let (token, user) = service
        .login(LoginDto {
            email: "JANE@example.com".to_string(),
            password: PASSWORD.to_string(),
        })
        .await?;

    assert_eq!(user.id, registered.id);
    assert_eq!(verify_token(&token, SECRET)?, registered.id);

    Ok(())
}

/// Tests login failures.
///
/// Expected: NotFound for an unknown email, InvalidPassword for a wrong password
#[tokio::test]
async fn login_failures() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = EmailService::new();
    let service = AuthService::new(db, SECRET, &mailer);

    let code = issued_code(&service, db, "jane@example.com").await;
    service
        .register(register_dto("jane@example.com", &code))
        .await?;

    let unknown = service
        .login(LoginDto {
            email: "nobody@example.com".to_string(),
            password: PASSWORD.to_string(),
        })
        .await;
    assert!(matches!(unknown, Err(AppError::NotFound(_))));

    let wrong = service
        .login(LoginDto {
            email: "jane@example.com".to_string(),
            password: "wr0ng!pass".to_string(),
        })
        .await;
    assert!(matches!(
        wrong,
        Err(AppError::AuthErr(AuthError::InvalidPassword))
    ));

    Ok(())
}
