use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::inscription::{CreateInscriptionDto, InscriptionDto, InscriptionQuery, RateDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::inscription::InscriptionFilter,
        service::inscription::InscriptionService,
        state::AppState,
    },
};

/// Registers the caller, or the user named in the body, for an event.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `201 Created` - PENDING inscription
/// - `400 Bad Request` - Flash event or incomplete participant data
/// - `404 Not Found` - Event or user does not exist
/// - `409 Conflict` - Event is full
pub async fn create_inscription(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateInscriptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let inscription = InscriptionService::new(&state.db)
        .create(user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(inscription.into_dto())))
}

/// Lists inscriptions, optionally filtered by `eventId` and `userId`.
pub async fn get_inscriptions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<InscriptionQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let filter = InscriptionFilter {
        event_id: query.event_id,
        user_id: query.user_id,
    };
    let inscriptions: Vec<InscriptionDto> = InscriptionService::new(&state.db)
        .get_all(filter)
        .await?
        .into_iter()
        .map(|inscription| inscription.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(inscriptions)))
}

pub async fn get_inscription(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let inscription = InscriptionService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(inscription.into_dto())))
}

/// Deletes an inscription.
///
/// # Access Control
/// - `RecordOwnerOrEventManager` - The registering user or a manager of the event
pub async fn delete_inscription(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt_secret, &headers);
    let caller = guard.require(&[]).await?;

    let service = InscriptionService::new(&state.db);
    let inscription = service.get(id).await?;
    guard
        .check(
            caller.id,
            &Permission::RecordOwnerOrEventManager {
                owner_id: inscription.user_id,
                event_id: inscription.event_id,
            },
        )
        .await?;

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Cancels an inscription and releases its capacity slot.
///
/// # Access Control
/// - `RecordOwnerOrEventManager`
///
/// # Returns
/// - `200 OK` - CANCELED inscription
/// - `400 Bad Request` - `{valid: false, reason}` when already canceled
/// - `404 Not Found` - Inscription does not exist
pub async fn cancel_inscription(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt_secret, &headers);
    let caller = guard.require(&[]).await?;

    let service = InscriptionService::new(&state.db);
    let inscription = service.get(id).await?;
    guard
        .check(
            caller.id,
            &Permission::RecordOwnerOrEventManager {
                owner_id: inscription.user_id,
                event_id: inscription.event_id,
            },
        )
        .await?;

    let inscription = service.cancel(id).await?;

    Ok((StatusCode::OK, Json(inscription.into_dto())))
}

/// Rates the event an inscription was for.
///
/// # Access Control
/// - The registering user
pub async fn rate_inscription(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<RateDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = InscriptionService::new(&state.db);
    let inscription = service.get(id).await?;
    if inscription.user_id != caller.id {
        return Err(AuthError::AccessDenied(
            caller.id,
            format!("attempted to rate inscription {}", id),
        )
        .into());
    }

    let inscription = service.rate(id, payload.note, payload.comment).await?;

    Ok((StatusCode::OK, Json(inscription.into_dto())))
}
