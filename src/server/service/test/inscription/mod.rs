use crate::{
    model::inscription::{CreateInscriptionDto, ParticipantInputDto},
    server::{
        data::event::EventRepository, error::AppError, model::attendance::TransitionError,
        service::inscription::InscriptionService,
    },
};
use entity::sea_orm_active_enums::{EventType, InscriptionStatus, ParticipationStatus};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod cancel;
mod create;

fn for_self(event_id: Uuid) -> CreateInscriptionDto {
    CreateInscriptionDto {
        event_id,
        user_id: None,
        for_another_one: false,
        participants: ParticipantInputDto::default(),
    }
}
