//! Polymorphic reviews over events and inscriptions.

use entity::sea_orm_active_enums::ReviewableType;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{event::EventRepository, inscription::InscriptionRepository, review::ReviewRepository},
    error::{auth::AuthError, AppError},
    model::review::{CreateReviewParams, Review},
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review after checking that its target exists.
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        let target_exists = match params.reviewable_type {
            ReviewableType::Event => EventRepository::new(self.db)
                .find_by_id(params.reviewable_id)
                .await?
                .is_some(),
            ReviewableType::Inscription => InscriptionRepository::new(self.db)
                .find_by_id(params.reviewable_id)
                .await?
                .is_some(),
        };
        if !target_exists {
            return Err(AppError::NotFound(format!(
                "{:?} {} not found",
                params.reviewable_type, params.reviewable_id
            )));
        }

        Ok(ReviewRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(&self, reviewable_id: Option<Uuid>) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).get_all(reviewable_id).await?)
    }

    /// Deletes a review. Only its author may do so.
    pub async fn delete(&self, caller_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let repo = ReviewRepository::new(self.db);

        let Some(review) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Review not found".to_string()));
        };
        if review.user_id != caller_id {
            return Err(AuthError::AccessDenied(
                caller_id,
                format!("attempted to delete review {} of another user", id),
            )
            .into());
        }

        repo.delete(id).await?;

        Ok(())
    }
}
