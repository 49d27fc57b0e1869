//! Data transfer objects exchanged over the HTTP API.
//!
//! Field names are serialized in camelCase, matching what the web and mobile clients send.

pub mod api;
pub mod attendance;
pub mod auth;
pub mod event;
pub mod faq;
pub mod image;
pub mod inscription;
pub mod organizer;
pub mod participation;
pub mod review;
pub mod user;
