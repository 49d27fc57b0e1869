//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate parameters,
//! coordinate several repositories for one operation and translate the boolean results of
//! conditional updates into domain errors. They return domain models, never entity models.

pub mod attendance;
pub mod auth;
pub mod email;
pub mod event;
pub mod faq;
pub mod image;
pub mod inscription;
pub mod maintenance;
pub mod organizer;
pub mod participation;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
