//! HTTP handlers.
//!
//! Handlers authenticate through `AuthGuard`, convert DTOs into domain parameters, call a
//! service and convert the result back into a DTO.

pub mod auth;
pub mod event;
pub mod faq;
pub mod image;
pub mod inscription;
pub mod organizer;
pub mod participation;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
