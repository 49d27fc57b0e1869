use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::participation::{ParticipationDto, ParticipationQuery, UpdateParticipationDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::participation::{ParticipationFilter, UpdateParticipationParams},
        service::participation::ParticipationService,
        state::AppState,
    },
};

/// Lists participations, optionally filtered by `eventId` and `userId`.
pub async fn get_participations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ParticipationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let filter = ParticipationFilter {
        event_id: query.event_id,
        user_id: query.user_id,
    };
    let participations: Vec<ParticipationDto> = ParticipationService::new(&state.db)
        .get_all(filter)
        .await?
        .into_iter()
        .map(|participation| participation.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(participations)))
}

pub async fn get_participation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let participation = ParticipationService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(participation.into_dto())))
}

/// Updates attendee data or the rating of a participation.
///
/// Presence status is not editable here; it only moves through validate-entry and
/// validate-exit.
///
/// # Access Control
/// - `RecordOwnerOrEventManager` - The attendee or a manager of the event
///
/// # Returns
/// - `200 OK` - Updated participation
/// - `400 Bad Request` - Invalid email or rating
/// - `404 Not Found` - Participation does not exist
pub async fn update_participation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateParticipationDto>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt_secret, &headers);
    let caller = guard.require(&[]).await?;

    let service = ParticipationService::new(&state.db);
    let participation = service.get(id).await?;
    guard
        .check(
            caller.id,
            &Permission::RecordOwnerOrEventManager {
                owner_id: participation.user_id,
                event_id: participation.event_id,
            },
        )
        .await?;

    let params = UpdateParticipationParams::from_dto(payload).map_err(AppError::BadRequest)?;
    let participation = service.update(id, params).await?;

    Ok((StatusCode::OK, Json(participation.into_dto())))
}

/// Deletes a participation.
///
/// # Access Control
/// - `RecordOwnerOrEventManager`
pub async fn delete_participation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt_secret, &headers);
    let caller = guard.require(&[]).await?;

    let service = ParticipationService::new(&state.db);
    let participation = service.get(id).await?;
    guard
        .check(
            caller.id,
            &Permission::RecordOwnerOrEventManager {
                owner_id: participation.user_id,
                event_id: participation.event_id,
            },
        )
        .await?;

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
