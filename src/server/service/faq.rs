use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::faq::FaqRepository,
    error::AppError,
    model::faq::{CreateFaqParams, Faq, UpdateFaqParams},
};

pub struct FaqService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FaqService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateFaqParams) -> Result<Faq, AppError> {
        Ok(FaqRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Faq>, AppError> {
        Ok(FaqRepository::new(self.db).get_all().await?)
    }

    pub async fn update(&self, id: Uuid, params: UpdateFaqParams) -> Result<Faq, AppError> {
        FaqRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("FAQ not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !FaqRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("FAQ not found".to_string()));
        }

        Ok(())
    }
}
