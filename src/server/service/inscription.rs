//! Inscription service: registration with capacity reservation, cancel, rating.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::inscription::CreateInscriptionDto,
    server::{
        data::{event::EventRepository, inscription::InscriptionRepository, user::UserRepository},
        error::AppError,
        model::{
            attendance::cancel_rejection,
            inscription::{
                Avaliation, CreateInscriptionParams, Inscription, InscriptionFilter, Participant,
            },
            user::User,
        },
    },
};

pub struct InscriptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InscriptionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user for a standard or class event.
    ///
    /// The registering user defaults to `caller_id`. When `forAnotherOne` is set every
    /// participant field must be provided; otherwise the participant is the registering
    /// user. A capacity slot is reserved before the row is inserted and released again if
    /// the insert fails.
    ///
    /// # Returns
    /// - `Ok(Inscription)` - PENDING inscription
    /// - `Err(AppError::NotFound)` - Event or user does not exist
    /// - `Err(AppError::BadRequest)` - Flash event or incomplete participant data
    /// - `Err(AppError::Conflict)` - Event is full
    pub async fn create(
        &self,
        caller_id: Uuid,
        dto: CreateInscriptionDto,
    ) -> Result<Inscription, AppError> {
        let event_repo = EventRepository::new(self.db);

        let Some(event) = event_repo.find_by_id(dto.event_id).await? else {
            return Err(AppError::NotFound("Event not found".to_string()));
        };
        if event.is_flash() {
            return Err(AppError::BadRequest(
                "Flash events do not take inscriptions; attendees check in directly".to_string(),
            ));
        }

        let user_id = dto.user_id.unwrap_or(caller_id);
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let participant = if dto.for_another_one {
            Participant::from_input(dto.participants).map_err(AppError::BadRequest)?
        } else {
            Participant::from_user(&User::from_entity(user))
        };

        if !event_repo.reserve_slot(event.id).await? {
            return Err(AppError::Conflict("Event is full".to_string()));
        }

        let params = CreateInscriptionParams {
            user_id,
            event_id: event.id,
            for_another_one: dto.for_another_one,
            participant,
        };

        match InscriptionRepository::new(self.db).create(params).await {
            Ok(inscription) => {
                tracing::info!(
                    "User {} registered inscription {} for event {}",
                    user_id,
                    inscription.id,
                    event.id
                );
                Ok(inscription)
            }
            Err(err) => {
                if let Err(release_err) = event_repo.release_slot(event.id).await {
                    tracing::error!(
                        "Failed to release slot of event {} after insert error: {}",
                        event.id,
                        release_err
                    );
                }
                Err(err.into())
            }
        }
    }

    pub async fn get_all(&self, filter: InscriptionFilter) -> Result<Vec<Inscription>, AppError> {
        Ok(InscriptionRepository::new(self.db).get_all(filter).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Inscription, AppError> {
        InscriptionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Inscription not found".to_string()))
    }

    /// Deletes an inscription, releasing its slot if it still held one.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let repo = InscriptionRepository::new(self.db);

        let inscription = self.get(id).await?;
        if !repo.delete(id).await? {
            return Err(AppError::NotFound("Inscription not found".to_string()));
        }

        if inscription.holds_slot() {
            EventRepository::new(self.db)
                .release_slot(inscription.event_id)
                .await?;
        }

        Ok(())
    }

    /// Cancels an inscription. Irreversible; the capacity slot is released.
    ///
    /// # Returns
    /// - `Ok(Inscription)` - Canceled inscription
    /// - `Err(AppError::NotFound)` - No inscription with that id
    /// - `Err(AppError::InvalidTransition(AlreadyCanceled))` - Already canceled
    pub async fn cancel(&self, id: Uuid) -> Result<Inscription, AppError> {
        let repo = InscriptionRepository::new(self.db);

        let applied = repo.cancel(id, Utc::now()).await?;
        let inscription = self.get(id).await?;

        if !applied {
            return Err(match cancel_rejection(inscription.status) {
                Some(reason) => reason.into(),
                None => AppError::Conflict("Inscription changed concurrently".to_string()),
            });
        }

        EventRepository::new(self.db)
            .release_slot(inscription.event_id)
            .await?;

        tracing::info!("Canceled inscription {}", id);

        Ok(inscription)
    }

    /// Stores the attendee's rating of the event.
    pub async fn rate(
        &self,
        id: Uuid,
        note: f64,
        comment: Option<String>,
    ) -> Result<Inscription, AppError> {
        let avaliation = Avaliation::new(note, comment).map_err(AppError::BadRequest)?;

        InscriptionRepository::new(self.db)
            .rate(id, avaliation)
            .await?
            .ok_or_else(|| AppError::NotFound("Inscription not found".to_string()))
    }
}
