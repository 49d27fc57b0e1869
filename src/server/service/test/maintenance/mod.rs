use crate::server::{
    data::verification_code::VerificationCodeRepository, error::AppError,
    service::maintenance::MaintenanceService,
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{InscriptionStatus, ParticipationStatus};
use test_utils::{builder::TestBuilder, factory};
