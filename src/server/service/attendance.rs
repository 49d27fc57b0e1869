//! Entry and exit validation.
//!
//! A scanned code resolves either to an inscription (standard and class events) or to a
//! flash event. Each movement is applied with a single conditional update; when it affects
//! no row the record is read again to report why.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        event::EventRepository, inscription::InscriptionRepository,
        participation::ParticipationRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        attendance::{
            inscription_rejection, participation_rejection, AttendanceOutcome, Movement,
            TransitionError,
        },
        event::Event,
        inscription::Inscription,
        participation::NewParticipationParams,
        user::User,
    },
    util::parse::parse_code,
};

/// What a scanned code refers to.
enum Target {
    Inscription(Inscription),
    FlashEvent(Event),
}

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks an attendee in.
    ///
    /// # Arguments
    /// - `code` - Inscription id, flash event id or flash event entry QR code
    /// - `attendee_id` - User entering a flash event; ignored for inscriptions
    ///
    /// # Returns
    /// - `Ok(AttendanceOutcome)` - Record after the transition
    /// - `Err(AppError::NotFound)` - Code or attendee unknown
    /// - `Err(AppError::BadRequest)` - Code names a non-flash event
    /// - `Err(AppError::InvalidTransition)` - Movement not allowed from the current state
    pub async fn validate_entry(
        &self,
        code: &str,
        attendee_id: Uuid,
    ) -> Result<AttendanceOutcome, AppError> {
        self.validate(code, attendee_id, Movement::Entry, Utc::now())
            .await
    }

    /// Checks an attendee out. Same resolution and errors as [`Self::validate_entry`].
    pub async fn validate_exit(
        &self,
        code: &str,
        attendee_id: Uuid,
    ) -> Result<AttendanceOutcome, AppError> {
        self.validate(code, attendee_id, Movement::Exit, Utc::now())
            .await
    }

    async fn validate(
        &self,
        code: &str,
        attendee_id: Uuid,
        movement: Movement,
        now: DateTime<Utc>,
    ) -> Result<AttendanceOutcome, AppError> {
        let outcome = match self.resolve(code).await? {
            Target::Inscription(inscription) => {
                self.move_inscription(inscription, movement, now).await?
            }
            Target::FlashEvent(event) => {
                self.move_participation(&event, attendee_id, movement, now)
                    .await?
            }
        };

        if movement == Movement::Entry {
            let event_id = match &outcome {
                AttendanceOutcome::Inscription(inscription) => inscription.event_id,
                AttendanceOutcome::Participation(participation) => participation.event_id,
            };
            // The attendance move is already committed, so a counter failure is only logged.
            if let Err(e) = EventRepository::new(self.db).record_entry(event_id).await {
                tracing::error!("Failed to count entry for event {}: {}", event_id, e);
            }
        }

        Ok(outcome)
    }

    /// Resolves a code as inscription id, then event id, then entry QR code.
    async fn resolve(&self, code: &str) -> Result<Target, AppError> {
        let event_repo = EventRepository::new(self.db);

        if let Some(id) = parse_code(code) {
            if let Some(inscription) = InscriptionRepository::new(self.db).find_by_id(id).await? {
                return Ok(Target::Inscription(inscription));
            }
            if let Some(event) = event_repo.find_by_id(id).await? {
                return flash_only(event);
            }
        }

        match event_repo.find_by_entry_code(code.trim()).await? {
            Some(event) => flash_only(event),
            None => Err(AppError::NotFound(
                "No inscription or event matches this code".to_string(),
            )),
        }
    }

    async fn move_inscription(
        &self,
        inscription: Inscription,
        movement: Movement,
        now: DateTime<Utc>,
    ) -> Result<AttendanceOutcome, AppError> {
        let repo = InscriptionRepository::new(self.db);

        let applied = match movement {
            Movement::Entry => repo.check_in(inscription.id, now).await?,
            Movement::Exit => repo.check_out(inscription.id, now).await?,
        };

        let Some(current) = repo.find_by_id(inscription.id).await? else {
            return Err(AppError::NotFound("Inscription not found".to_string()));
        };

        if !applied {
            return Err(refusal(inscription_rejection(
                current.status,
                current.participation_status,
                movement,
            )));
        }

        tracing::info!(
            "Inscription {} {:?} at event {}",
            current.id,
            movement,
            current.event_id
        );

        Ok(AttendanceOutcome::Inscription(current))
    }

    async fn move_participation(
        &self,
        event: &Event,
        user_id: Uuid,
        movement: Movement,
        now: DateTime<Utc>,
    ) -> Result<AttendanceOutcome, AppError> {
        let repo = ParticipationRepository::new(self.db);

        let applied = match movement {
            Movement::Entry => {
                let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
                    return Err(AppError::NotFound("User not found".to_string()));
                };
                let user = User::from_entity(user);
                let params = NewParticipationParams {
                    user_id,
                    event_id: event.id,
                    name: user.full_name(),
                    email: user.email,
                    date_of_birth: user.date_of_birth,
                    document: user.cpf,
                };

                if repo.insert_checked_in(params, now).await? {
                    true
                } else {
                    match repo.find_by_user_and_event(user_id, event.id).await? {
                        Some(existing) => repo.check_in(existing.id, now).await?,
                        None => false,
                    }
                }
            }
            Movement::Exit => match repo.find_by_user_and_event(user_id, event.id).await? {
                Some(existing) => repo.check_out(existing.id, now).await?,
                None => return Err(TransitionError::NotCheckedIn.into()),
            },
        };

        let Some(current) = repo.find_by_user_and_event(user_id, event.id).await? else {
            return Err(AppError::NotFound("Participation not found".to_string()));
        };

        if !applied {
            return Err(refusal(participation_rejection(current.status, movement)));
        }

        tracing::info!(
            "User {} {:?} at flash event {}",
            user_id,
            movement,
            event.id
        );

        Ok(AttendanceOutcome::Participation(current))
    }
}

fn flash_only(event: Event) -> Result<Target, AppError> {
    if event.is_flash() {
        Ok(Target::FlashEvent(event))
    } else {
        Err(AppError::BadRequest(
            "This event requires an inscription; scan the inscription code instead".to_string(),
        ))
    }
}

/// Error for a guarded update that affected no row.
///
/// `None` means the re-read state would allow the movement, i.e. another request changed
/// the record between the update and the read.
fn refusal(reason: Option<TransitionError>) -> AppError {
    match reason {
        Some(reason) => reason.into(),
        None => AppError::Conflict("Attendance changed concurrently, try again".to_string()),
    }
}
