use crate::server::{error::AppError, service::organizer::OrganizerService};
use entity::sea_orm_active_enums::OrganizerLevel;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod update_level;
