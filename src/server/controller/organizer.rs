use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::organizer::{OrganizerDto, OrganizerPayloadDto, RemoveOrganizerDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::organizer::OrganizerService,
        state::AppState,
    },
};

/// Adds an organizer to an event.
///
/// # Access Control
/// - `EventManage` - Owner or admin organizer of the event
///
/// # Returns
/// - `201 Created` - The new organizer entry
/// - `404 Not Found` - Event or user does not exist
/// - `409 Conflict` - User already organizes the event
pub async fn add_organizer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<OrganizerPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::EventManage(event_id)])
        .await?;

    let organizer = OrganizerService::new(&state.db)
        .add(event_id, payload.user_id, payload.nivel)
        .await?;

    Ok((StatusCode::CREATED, Json(organizer.into_dto())))
}

pub async fn get_organizers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let organizers: Vec<OrganizerDto> = OrganizerService::new(&state.db)
        .get_by_event(event_id)
        .await?
        .into_iter()
        .map(|organizer| organizer.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(organizers)))
}

/// Changes an organizer's level.
///
/// # Access Control
/// - `EventManage`
pub async fn update_organizer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<OrganizerPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::EventManage(event_id)])
        .await?;

    let organizer = OrganizerService::new(&state.db)
        .update_level(event_id, payload.user_id, payload.nivel)
        .await?;

    Ok((StatusCode::OK, Json(organizer.into_dto())))
}

/// Removes an organizer from an event.
///
/// # Access Control
/// - `EventManage`
pub async fn remove_organizer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<RemoveOrganizerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::EventManage(event_id)])
        .await?;

    OrganizerService::new(&state.db)
        .remove(event_id, payload.user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
