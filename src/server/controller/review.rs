use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::review::{CreateReviewDto, ReviewDto, ReviewQuery},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::review::CreateReviewParams,
        service::review::ReviewService, state::AppState,
    },
};

/// Reviews an event or an inscription as the caller.
///
/// # Returns
/// - `201 Created` - The review
/// - `400 Bad Request` - Rating outside 0 to 5
/// - `404 Not Found` - Reviewed record does not exist
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let params = CreateReviewParams::from_dto(user.id, payload).map_err(AppError::BadRequest)?;
    let review = ReviewService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

pub async fn get_reviews(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ReviewQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let reviews: Vec<ReviewDto> = ReviewService::new(&state.db)
        .get_all(query.reviewable_id)
        .await?
        .into_iter()
        .map(|review| review.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(reviews)))
}

/// Deletes a review. Only its author may do so.
pub async fn delete_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    ReviewService::new(&state.db).delete(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
