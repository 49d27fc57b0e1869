use crate::server::data::inscription::InscriptionRepository;
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{InscriptionStatus, ParticipationStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod check_in;
mod check_out;
mod expire_no_shows;
