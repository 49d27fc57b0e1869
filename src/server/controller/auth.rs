use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        auth::{
            ForgotPasswordDto, LoginDto, LoginResponseDto, RegisterDto,
            RequestVerificationCodeDto, ResetPasswordDto, ResetPasswordQuery,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::auth::AuthService,
        state::AppState,
    },
};

/// Logs a user in.
///
/// # Returns
/// - `200 OK` - Token and user summary
/// - `401 Unauthorized` - Wrong password
/// - `404 Not Found` - No account with that email
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt_secret, &state.mailer);

    let (token, user) = service.login(payload).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            message: "Login successful".to_string(),
            token,
            user: user.into_auth_dto(),
        }),
    ))
}

/// Emails a registration verification code.
///
/// # Returns
/// - `202 Accepted` - Code generated and handed to the mailer
/// - `400 Bad Request` - Malformed email
/// - `409 Conflict` - Email already registered
pub async fn request_verification_code(
    State(state): State<AppState>,
    Json(payload): Json<RequestVerificationCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.jwt_secret, &state.mailer)
        .request_verification_code(&payload.email)
        .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(MessageDto::new("Verification code sent")),
    ))
}

/// Registers a new account with a verification code.
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Validation failure or invalid code
/// - `409 Conflict` - Email or cpf already registered
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, &state.jwt_secret, &state.mailer)
        .register(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Starts a password reset. Always answers 200.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.jwt_secret, &state.mailer)
        .forgot_password(&payload.email, &state.app_url)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(
            "If the email is registered, a reset link has been sent",
        )),
    ))
}

/// Sets a new password using the emailed reset token.
pub async fn reset_password(
    State(state): State<AppState>,
    Query(query): Query<ResetPasswordQuery>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.jwt_secret, &state.mailer)
        .reset_password(&query.token, &payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Password reset successfully")),
    ))
}

/// Returns the authenticated user.
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
