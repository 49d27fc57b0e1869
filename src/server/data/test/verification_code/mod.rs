use crate::server::data::verification_code::VerificationCodeRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod consume;
mod upsert;
