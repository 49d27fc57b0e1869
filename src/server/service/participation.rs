//! Flash event participations. They are created only by check-in.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::participation::ParticipationRepository,
    error::AppError,
    model::participation::{Participation, ParticipationFilter, UpdateParticipationParams},
};

pub struct ParticipationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParticipationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(
        &self,
        filter: ParticipationFilter,
    ) -> Result<Vec<Participation>, AppError> {
        Ok(ParticipationRepository::new(self.db).get_all(filter).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Participation, AppError> {
        ParticipationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Participation not found".to_string()))
    }

    /// Updates personal data and rating; presence is only changed by check-in and check-out.
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateParticipationParams,
    ) -> Result<Participation, AppError> {
        ParticipationRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Participation not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !ParticipationRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Participation not found".to_string()));
        }

        Ok(())
    }
}
