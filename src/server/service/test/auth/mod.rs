use crate::{
    model::auth::{LoginDto, RegisterDto},
    server::{
        data::{user::UserRepository, verification_code::VerificationCodeRepository},
        error::{auth::AuthError, AppError},
        service::{auth::AuthService, email::EmailService},
        util::token::verify_token,
    },
};
use chrono::NaiveDate;
use test_utils::builder::TestBuilder;

mod login;
mod register;

const SECRET: &str = "test-secret";
const PASSWORD: &str = "s3cret!pass";

fn register_dto(email: &str, code: &str) -> RegisterDto {
    RegisterDto {
        email: email.to_string(),
        code: code.to_string(),
        name: "Jane".to_string(),
        lastname: "Doe".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
        cpf: "123.456.789-00".to_string(),
        phone: "+5511988887777".to_string(),
        password: PASSWORD.to_string(),
    }
}

/// Requests a verification code and reads it back from the store.
async fn issued_code(
    service: &AuthService<'_>,
    db: &sea_orm::DatabaseConnection,
    email: &str,
) -> String {
    service.request_verification_code(email).await.unwrap();

    VerificationCodeRepository::new(db)
        .find(email)
        .await
        .unwrap()
        .unwrap()
        .code
}
