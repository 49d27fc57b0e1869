//! Authentication service: login, registration by verification code and password reset.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::auth::{LoginDto, RegisterDto},
    server::{
        data::{user::UserRepository, verification_code::VerificationCodeRepository},
        error::{auth::AuthError, AppError},
        model::user::{is_plausible_email, normalize_email, CreateUserParams, User},
        service::email::EmailService,
        util::{
            code::generate_code,
            password::{hash_password, validate_password, verify_password},
            token::issue_token,
        },
    },
};

/// Length of registration verification codes.
pub const VERIFICATION_CODE_LENGTH: usize = 5;

/// Lifetime of a registration verification code.
pub const VERIFICATION_CODE_TTL_MINUTES: i64 = 5;

/// Lifetime of a password reset token.
pub const RESET_TOKEN_TTL_HOURS: i64 = 1;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt_secret: &'a str,
    mailer: &'a EmailService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt_secret: &'a str, mailer: &'a EmailService) -> Self {
        Self {
            db,
            jwt_secret,
            mailer,
        }
    }

    /// Checks credentials and issues an access token.
    ///
    /// # Returns
    /// - `Ok((token, user))` - Credentials valid
    /// - `Err(AppError::NotFound)` - No account with that email
    /// - `Err(AppError::AuthErr(InvalidPassword))` - Wrong password
    pub async fn login(&self, dto: LoginDto) -> Result<(String, User), AppError> {
        let user_repo = UserRepository::new(self.db);

        let email = normalize_email(&dto.email);
        let Some(user) = user_repo.find_by_email(&email).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if !verify_password(&dto.password, &user.password_hash)? {
            return Err(AuthError::InvalidPassword.into());
        }

        let token = issue_token(user.id, self.jwt_secret)?;

        tracing::info!("User {} logged in", user.id);

        Ok((token, User::from_entity(user)))
    }

    /// Generates a verification code for a not yet registered email and mails it.
    ///
    /// A new request replaces any code previously issued for the same email.
    pub async fn request_verification_code(&self, email: &str) -> Result<(), AppError> {
        let email = normalize_email(email);
        if !is_plausible_email(&email) {
            return Err(AppError::BadRequest("Invalid email".to_string()));
        }

        if UserRepository::new(self.db).email_exists(&email).await? {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        let code = generate_code(VERIFICATION_CODE_LENGTH);
        let expires_at = Utc::now() + Duration::minutes(VERIFICATION_CODE_TTL_MINUTES);
        VerificationCodeRepository::new(self.db)
            .upsert(&email, &code, expires_at)
            .await?;

        self.mailer.send_verification_code(&email, &code);

        Ok(())
    }

    /// Registers a user whose email was proven by a verification code.
    ///
    /// The code is consumed only after every other check passed, so a request rejected for
    /// a weak password can be retried with the same code.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user
    /// - `Err(AppError::BadRequest)` - Validation failed or the code is invalid or expired
    /// - `Err(AppError::Conflict)` - Email or cpf already registered
    pub async fn register(&self, dto: RegisterDto) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let code = dto.code.trim().to_uppercase();
        let mut params = CreateUserParams::from_register_dto(dto);
        params.validate().map_err(AppError::BadRequest)?;
        validate_password(&params.password).map_err(AppError::BadRequest)?;

        if user_repo.email_exists(&params.email).await? {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }
        if user_repo.cpf_exists(&params.cpf).await? {
            return Err(AppError::Conflict("CPF is already registered".to_string()));
        }

        let consumed = VerificationCodeRepository::new(self.db)
            .consume(&params.email, &code, Utc::now())
            .await?;
        if !consumed {
            return Err(AppError::BadRequest(
                "Invalid or expired verification code".to_string(),
            ));
        }

        params.password = hash_password(&params.password)?;
        let user = user_repo
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "Email or CPF is already registered"))?;

        tracing::info!("Registered user {}", user.id);

        Ok(User::from_entity(user))
    }

    /// Stores a reset token for the account and mails the reset link.
    ///
    /// Unknown emails are ignored silently so the endpoint does not reveal which addresses
    /// have an account.
    pub async fn forgot_password(&self, email: &str, app_url: &str) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let email = normalize_email(email);
        let Some(user) = user_repo.find_by_email(&email).await? else {
            tracing::debug!("Password reset requested for unknown email");
            return Ok(());
        };

        let token = Uuid::new_v4().simple().to_string();
        let expires_at = Utc::now() + Duration::hours(RESET_TOKEN_TTL_HOURS);
        user_repo.set_reset_token(user.id, &token, expires_at).await?;

        let link = format!("{}/reset-password?token={}", app_url, token);
        self.mailer.send_password_reset(&user.email, &link);

        Ok(())
    }

    /// Replaces the password of the user holding an unexpired reset token.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced, token consumed
    /// - `Err(AppError::BadRequest)` - Weak password, or token invalid, expired or already used
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        validate_password(new_password).map_err(AppError::BadRequest)?;

        let invalid = || AppError::BadRequest("Invalid or expired token".to_string());

        let Some(user) = user_repo.find_by_reset_token(token, Utc::now()).await? else {
            return Err(invalid());
        };

        let hash = hash_password(new_password)?;
        if !user_repo.reset_password(user.id, token, hash).await? {
            return Err(invalid());
        }

        tracing::info!("Password reset for user {}", user.id);

        Ok(())
    }
}
