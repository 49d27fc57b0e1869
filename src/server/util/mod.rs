//! Small helpers shared by services and controllers.

pub mod code;
pub mod parse;
pub mod password;
pub mod token;
