use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        attendance::ValidateAttendanceDto,
        event::{CreateEventDto, EventDto, UpdateEventDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            attendance::Movement,
            event::{CreateEventParams, UpdateEventParams},
        },
        service::{attendance::AttendanceService, event::EventService},
        state::AppState,
        util::parse::parse_optional_body,
    },
};

/// Creates an event owned by the caller.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `201 Created` - The new event
/// - `400 Bad Request` - Invalid schedule, capacity or empty name
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let event = EventService::new(&state.db)
        .create(CreateEventParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

pub async fn get_events(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let events: Vec<EventDto> = EventService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|event| event.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(events)))
}

pub async fn get_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let event = EventService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Updates an event.
///
/// # Access Control
/// - `EventManage` - Owner or admin organizer of the event
///
/// # Returns
/// - `200 OK` - Updated event
/// - `400 Bad Request` - Update would leave the event inconsistent
/// - `403 Forbidden` - Caller does not manage the event
/// - `404 Not Found` - Event does not exist
pub async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::EventManage(id)])
        .await?;

    let event = EventService::new(&state.db)
        .update(id, UpdateEventParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Deletes an event together with its inscriptions and participations.
///
/// # Access Control
/// - `EventOwner`
pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[Permission::EventOwner(id)])
        .await?;

    EventService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Checks an attendee in.
///
/// The path carries an inscription id, a flash event id or a flash event's entry QR code.
/// For flash events the optional body `{userId}` names the attendee; it defaults to the
/// caller.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - `{valid: true, message, kind, inscription|participation}`
/// - `400 Bad Request` - `{valid: false, reason}` when the transition is not allowed, or the
///   code names a non-flash event
/// - `404 Not Found` - Unknown code or attendee
/// - `409 Conflict` - The record changed concurrently
pub async fn validate_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(code): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    validate(state, headers, code, body, Movement::Entry).await
}

/// Checks an attendee out. Same inputs and responses as [`validate_entry`].
pub async fn validate_exit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(code): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    validate(state, headers, code, body, Movement::Exit).await
}

async fn validate(
    state: AppState,
    headers: HeaderMap,
    code: String,
    body: Bytes,
    movement: Movement,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let payload: ValidateAttendanceDto = parse_optional_body(&body)?;
    let attendee_id = payload.user_id.unwrap_or(caller.id);

    let service = AttendanceService::new(&state.db);
    let outcome = match movement {
        Movement::Entry => service.validate_entry(&code, attendee_id).await?,
        Movement::Exit => service.validate_exit(&code, attendee_id).await?,
    };

    Ok((StatusCode::OK, Json(outcome.into_dto(movement))))
}
