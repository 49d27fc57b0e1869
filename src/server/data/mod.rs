//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models, except for the user repository which hands out entity models so the
//! service layer can check password hashes.
//!
//! Attendance transitions are single conditional updates: the `WHERE` clause carries the
//! source-state guard and the caller inspects the affected row count.

pub mod event;
pub mod faq;
pub mod image;
pub mod inscription;
pub mod organizer;
pub mod participation;
pub mod review;
pub mod user;
pub mod verification_code;

#[cfg(test)]
mod test;
