use crate::server::{
    data::participation::ParticipationRepository,
    model::participation::NewParticipationParams,
};
use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::ParticipationStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod check_in;
mod insert_checked_in;

fn new_params(user_id: Uuid, event_id: Uuid) -> NewParticipationParams {
    NewParticipationParams {
        user_id,
        event_id,
        name: "Flash Attendee".to_string(),
        email: "flash@example.com".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1999, 9, 9).unwrap(),
        document: "000.111.222-33".to_string(),
    }
}
