use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::server::model::image::Image;

pub struct ImageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an uploaded image.
    pub async fn create(&self, url: String, public_id: String) -> Result<Image, DbErr> {
        let model = entity::image::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            url: ActiveValue::Set(url),
            public_id: ActiveValue::Set(public_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Image::from_entity(model))
    }
}
