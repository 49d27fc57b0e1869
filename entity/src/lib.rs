//! SeaORM entity definitions for the EventPro schema.

pub mod prelude;

pub mod event;
pub mod event_organizer;
pub mod faq;
pub mod image;
pub mod inscription;
pub mod participation;
pub mod review;
pub mod sea_orm_active_enums;
pub mod user;
pub mod verification_code;
