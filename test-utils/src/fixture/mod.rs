//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests of domain conversions and
//! transition rules. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let inscription = fixture::inscription::entity_builder()
//!     .status(InscriptionStatus::Canceled)
//!     .build();
//! ```

pub mod event;
pub mod inscription;

pub use event::entity as event_entity;
pub use inscription::{entity as inscription_entity, entity_builder as inscription_entity_builder};
