//! Event service.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::event::EventRepository,
    error::AppError,
    model::event::{CreateEventParams, Event, UpdateEventParams},
};

const ENTRY_CODE_TAKEN: &str = "Entry QR code is already used by another event";

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event owned by `params.owner_id`.
    ///
    /// # Returns
    /// - `Ok(Event)` - Created event with zeroed capacity counters
    /// - `Err(AppError::BadRequest)` - Parameters break an event rule
    /// - `Err(AppError::Conflict)` - Another event already uses the entry QR code
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, AppError> {
        params.validate().map_err(AppError::BadRequest)?;

        let repo = EventRepository::new(self.db);
        if let Some(code) = &params.entry_qr_code {
            if repo.find_by_entry_code(code).await?.is_some() {
                return Err(AppError::Conflict(ENTRY_CODE_TAKEN.to_string()));
            }
        }

        let event = repo
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, ENTRY_CODE_TAKEN))?;

        tracing::info!("Created {:?} event {}", event.event_type, event.id);

        Ok(event)
    }

    pub async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    /// Applies a partial update, validated against the current state of the event.
    pub async fn update(&self, id: Uuid, params: UpdateEventParams) -> Result<Event, AppError> {
        let current = self.get(id).await?;
        params.validate(&current).map_err(AppError::BadRequest)?;

        EventRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !EventRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Event not found".to_string()));
        }

        tracing::info!("Deleted event {}", id);

        Ok(())
    }
}
