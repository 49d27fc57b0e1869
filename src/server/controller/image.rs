use axum::{
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::server::{
    error::AppError,
    middleware::auth::AuthGuard,
    service::image::{ImageService, ImageUpload},
    state::AppState,
};

/// Multipart field carrying the image.
const IMAGE_FIELD: &str = "image";

/// Stores an uploaded image and returns its public URL.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `201 Created` - `{id, url, publicId, createdAt}`
/// - `400 Bad Request` - No `image` part, empty or oversized file, or not an image
pub async fn upload_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt_secret, &headers)
        .require(&[])
        .await?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        upload = Some(ImageUpload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
        break;
    }

    let Some(upload) = upload else {
        return Err(AppError::BadRequest("No image file sent".to_string()));
    };

    let image = ImageService::new(&state.db, &state.upload_dir, &state.app_url)
        .upload(upload)
        .await?;

    Ok((StatusCode::CREATED, Json(image.into_dto())))
}
