//! FAQ endpoints. These are public and take no bearer token.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::faq::{CreateFaqDto, FaqDto, UpdateFaqDto},
    server::{
        error::AppError,
        model::faq::{CreateFaqParams, UpdateFaqParams},
        service::faq::FaqService,
        state::AppState,
    },
};

pub async fn create_faq(
    State(state): State<AppState>,
    Json(payload): Json<CreateFaqDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateFaqParams::from_dto(payload).map_err(AppError::BadRequest)?;
    let faq = FaqService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(faq.into_dto())))
}

pub async fn get_faqs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let faqs: Vec<FaqDto> = FaqService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|faq| faq.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(faqs)))
}

pub async fn update_faq(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFaqDto>,
) -> Result<impl IntoResponse, AppError> {
    let faq = FaqService::new(&state.db)
        .update(id, UpdateFaqParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(faq.into_dto())))
}

pub async fn delete_faq(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    FaqService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
