//! Request guards.
//!
//! `AuthGuard` resolves the bearer token of a request to a user and checks the
//! permissions an endpoint requires.

pub mod auth;
