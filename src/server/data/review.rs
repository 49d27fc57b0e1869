use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::review::{CreateReviewParams, Review};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let now = Utc::now();
        let model = entity::review::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.user_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            reviewable_id: ActiveValue::Set(params.reviewable_id),
            reviewable_type: ActiveValue::Set(params.reviewable_type),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(model))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DbErr> {
        Ok(entity::prelude::Review::find_by_id(id)
            .one(self.db)
            .await?
            .map(Review::from_entity))
    }

    /// Lists reviews, newest first, optionally only those of one reviewable.
    pub async fn get_all(&self, reviewable_id: Option<Uuid>) -> Result<Vec<Review>, DbErr> {
        let mut query = entity::prelude::Review::find();
        if let Some(reviewable_id) = reviewable_id {
            query = query.filter(entity::review::Column::ReviewableId.eq(reviewable_id));
        }

        Ok(query
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Review::from_entity)
            .collect())
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected == 1)
    }
}
