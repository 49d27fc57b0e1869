use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ReviewableType;
use uuid::Uuid;

use crate::model::review::{CreateReviewDto, ReviewDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    pub rating: f64,
    pub comment: Option<String>,
    pub reviewable_id: Uuid,
    pub reviewable_type: ReviewableType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            rating: entity.rating,
            comment: entity.comment,
            reviewable_id: entity.reviewable_id,
            reviewable_type: entity.reviewable_type,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            user_id: self.user_id,
            rating: self.rating,
            comment: self.comment,
            reviewable_id: self.reviewable_id,
            reviewable_type: self.reviewable_type,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub user_id: Uuid,
    pub rating: f64,
    pub comment: Option<String>,
    pub reviewable_id: Uuid,
    pub reviewable_type: ReviewableType,
}

impl CreateReviewParams {
    /// Validates the rating range and builds the parameters for the author.
    pub fn from_dto(user_id: Uuid, dto: CreateReviewDto) -> Result<Self, String> {
        if !(0.0..=5.0).contains(&dto.rating) {
            return Err("Rating must be between 0 and 5".to_string());
        }
        Ok(Self {
            user_id,
            rating: dto.rating,
            comment: dto.comment.filter(|c| !c.trim().is_empty()),
            reviewable_id: dto.reviewable_id,
            reviewable_type: dto.reviewable_type,
        })
    }
}
