use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::image::ImageDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub id: Uuid,
    pub url: String,
    pub public_id: String,
    pub created_at: DateTime<Utc>,
}

impl Image {
    pub fn from_entity(entity: entity::image::Model) -> Self {
        Self {
            id: entity.id,
            url: entity.url,
            public_id: entity.public_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ImageDto {
        ImageDto {
            id: self.id,
            url: self.url,
            public_id: self.public_id,
            created_at: self.created_at,
        }
    }
}
