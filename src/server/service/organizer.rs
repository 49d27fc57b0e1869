//! Event organizer management.

use entity::sea_orm_active_enums::OrganizerLevel;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{organizer::OrganizerRepository, user::UserRepository},
    error::AppError,
    model::organizer::Organizer,
};

pub struct OrganizerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrganizerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches a user to an event. The event is expected to exist.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The user does not exist
    /// - `Err(AppError::Conflict)` - The user already organizes the event
    pub async fn add(
        &self,
        event_id: Uuid,
        user_id: Uuid,
        level: OrganizerLevel,
    ) -> Result<Organizer, AppError> {
        if UserRepository::new(self.db).find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let repo = OrganizerRepository::new(self.db);
        if repo.find(event_id, user_id).await?.is_some() {
            return Err(AppError::Conflict(
                "User is already an organizer of this event".to_string(),
            ));
        }

        repo.add(event_id, user_id, level)
            .await
            .map_err(|e| {
                AppError::conflict_on_unique(e, "User is already an organizer of this event")
            })
    }

    pub async fn get_by_event(&self, event_id: Uuid) -> Result<Vec<Organizer>, AppError> {
        Ok(OrganizerRepository::new(self.db)
            .get_by_event(event_id)
            .await?)
    }

    pub async fn update_level(
        &self,
        event_id: Uuid,
        user_id: Uuid,
        level: OrganizerLevel,
    ) -> Result<Organizer, AppError> {
        let repo = OrganizerRepository::new(self.db);

        if !repo.update_level(event_id, user_id, level).await? {
            return Err(AppError::NotFound("Organizer not found".to_string()));
        }

        repo.find(event_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Organizer not found".to_string()))
    }

    pub async fn remove(&self, event_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        if !OrganizerRepository::new(self.db)
            .remove(event_id, user_id)
            .await?
        {
            return Err(AppError::NotFound("Organizer not found".to_string()));
        }

        Ok(())
    }
}
