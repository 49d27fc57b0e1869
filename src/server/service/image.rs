//! Image upload to the local upload directory.

use std::path::Path;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{data::image::ImageRepository, error::AppError, model::image::Image};

/// Upper bound on accepted image size.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// An image part read from a multipart request.
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

pub struct ImageService<'a> {
    db: &'a DatabaseConnection,
    upload_dir: &'a Path,
    app_url: &'a str,
}

impl<'a> ImageService<'a> {
    pub fn new(db: &'a DatabaseConnection, upload_dir: &'a Path, app_url: &'a str) -> Self {
        Self {
            db,
            upload_dir,
            app_url,
        }
    }

    /// Stores the image under a generated name and records it.
    ///
    /// # Returns
    /// - `Ok(Image)` - Stored image with its public URL
    /// - `Err(AppError::BadRequest)` - Empty, oversized or non-image upload
    pub async fn upload(&self, upload: ImageUpload) -> Result<Image, AppError> {
        if upload.bytes.is_empty() {
            return Err(AppError::BadRequest("Image is empty".to_string()));
        }
        if upload.bytes.len() > MAX_IMAGE_BYTES {
            return Err(AppError::BadRequest("Image exceeds 5 MB".to_string()));
        }
        if let Some(content_type) = &upload.content_type {
            if !content_type.starts_with("image/") {
                return Err(AppError::BadRequest(format!(
                    "Unsupported content type {}",
                    content_type
                )));
            }
        }

        let public_id = match upload.file_name.as_deref().and_then(extension) {
            Some(ext) => format!("{}.{}", Uuid::new_v4().simple(), ext),
            None => Uuid::new_v4().simple().to_string(),
        };

        tokio::fs::write(self.upload_dir.join(&public_id), &upload.bytes).await?;

        let url = format!("{}/uploads/{}", self.app_url, public_id);
        let image = ImageRepository::new(self.db).create(url, public_id).await?;

        tracing::info!("Stored image {}", image.public_id);

        Ok(image)
    }
}

/// Lowercased extension of a client file name, if it is short and alphanumeric.
fn extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let valid = !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric());

    valid.then(|| ext.to_ascii_lowercase())
}
