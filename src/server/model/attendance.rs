//! Attendance state machine.
//!
//! Inscriptions carry two statuses: the registration `status` and the physical presence
//! `participation_status`. Flash event participations only carry a presence status.
//!
//! ```text
//! PENDING/CONFIRMED --checkin--> CHECKIN --checkout--> CHECKOUT (terminal)
//! any --cancel--> CANCELED (terminal, inscriptions only)
//! ```
//!
//! The functions here decide whether a transition is legal. The repositories apply the same
//! rules as guards of a conditional `UPDATE`, using the source-state constants below, so a
//! transition happens at most once even under concurrent requests.

use entity::sea_orm_active_enums::{InscriptionStatus, ParticipationStatus};
use thiserror::Error;

use crate::{
    model::attendance::{AttendanceDto, AttendanceKind},
    server::model::{inscription::Inscription, participation::Participation},
};

/// Registration statuses from which an inscription may check in.
pub const INSCRIPTION_ENTRY_STATUSES: [InscriptionStatus; 2] =
    [InscriptionStatus::Pending, InscriptionStatus::Confirmed];

/// Registration statuses that block every presence transition.
pub const INSCRIPTION_BLOCKED_STATUSES: [InscriptionStatus; 2] =
    [InscriptionStatus::Canceled, InscriptionStatus::Expired];

/// Presence statuses from which a flash participation may check in.
pub const PARTICIPATION_ENTRY_STATUSES: [ParticipationStatus; 2] =
    [ParticipationStatus::Pending, ParticipationStatus::NoShow];

/// Direction of a presence transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Entry,
    Exit,
}

/// Reason an attendance transition was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    #[error("inscription is canceled")]
    Canceled,
    #[error("inscription is expired")]
    Expired,
    #[error("already checked in")]
    AlreadyCheckedIn,
    #[error("already checked out")]
    AlreadyCheckedOut,
    #[error("not checked in")]
    NotCheckedIn,
    #[error("attendee was marked as no-show")]
    NoShow,
    #[error("inscription is already canceled")]
    AlreadyCanceled,
}

/// Decides whether an inscription may perform the given movement.
///
/// # Returns
/// - `None` - Transition is legal
/// - `Some(TransitionError)` - Reason for rejection
pub fn inscription_rejection(
    status: InscriptionStatus,
    presence: ParticipationStatus,
    movement: Movement,
) -> Option<TransitionError> {
    match status {
        InscriptionStatus::Canceled => return Some(TransitionError::Canceled),
        InscriptionStatus::Expired => return Some(TransitionError::Expired),
        _ => {}
    }

    match (movement, presence) {
        (Movement::Entry, ParticipationStatus::Pending) => {
            if INSCRIPTION_ENTRY_STATUSES.contains(&status) {
                None
            } else {
                // USED without a recorded presence: the ticket was already consumed.
                Some(TransitionError::AlreadyCheckedIn)
            }
        }
        (Movement::Entry, ParticipationStatus::Checkin) => Some(TransitionError::AlreadyCheckedIn),
        (Movement::Entry, ParticipationStatus::Checkout) => {
            Some(TransitionError::AlreadyCheckedOut)
        }
        (Movement::Entry, ParticipationStatus::NoShow) => Some(TransitionError::NoShow),
        (Movement::Exit, ParticipationStatus::Checkin) => None,
        (Movement::Exit, ParticipationStatus::Checkout) => Some(TransitionError::AlreadyCheckedOut),
        (Movement::Exit, ParticipationStatus::Pending | ParticipationStatus::NoShow) => {
            Some(TransitionError::NotCheckedIn)
        }
    }
}

/// Decides whether a flash event participation may perform the given movement.
pub fn participation_rejection(
    presence: ParticipationStatus,
    movement: Movement,
) -> Option<TransitionError> {
    match (movement, presence) {
        (Movement::Entry, ParticipationStatus::Checkin) => Some(TransitionError::AlreadyCheckedIn),
        (Movement::Entry, ParticipationStatus::Checkout) => {
            Some(TransitionError::AlreadyCheckedOut)
        }
        (Movement::Entry, ParticipationStatus::Pending | ParticipationStatus::NoShow) => None,
        (Movement::Exit, ParticipationStatus::Checkin) => None,
        (Movement::Exit, ParticipationStatus::Checkout) => Some(TransitionError::AlreadyCheckedOut),
        (Movement::Exit, ParticipationStatus::Pending | ParticipationStatus::NoShow) => {
            Some(TransitionError::NotCheckedIn)
        }
    }
}

/// Decides whether an inscription may be canceled. Only a second cancel is refused.
pub fn cancel_rejection(status: InscriptionStatus) -> Option<TransitionError> {
    (status == InscriptionStatus::Canceled).then_some(TransitionError::AlreadyCanceled)
}

/// Record touched by a successful validation.
#[derive(Debug, Clone)]
pub enum AttendanceOutcome {
    Inscription(Inscription),
    Participation(Participation),
}

impl AttendanceOutcome {
    /// Converts the outcome into the validator response body.
    pub fn into_dto(self, movement: Movement) -> AttendanceDto {
        let message = match movement {
            Movement::Entry => "Check-in performed successfully",
            Movement::Exit => "Check-out performed successfully",
        }
        .to_string();

        match self {
            Self::Inscription(inscription) => AttendanceDto {
                valid: true,
                message,
                kind: AttendanceKind::Inscription,
                inscription: Some(inscription.into_dto()),
                participation: None,
            },
            Self::Participation(participation) => AttendanceDto {
                valid: true,
                message,
                kind: AttendanceKind::Participation,
                inscription: None,
                participation: Some(participation.into_dto()),
            },
        }
    }
}
