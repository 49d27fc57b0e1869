use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned when an attendance transition is rejected.
#[derive(Serialize, Deserialize)]
pub struct RejectionDto {
    pub valid: bool,
    pub reason: String,
}

#[derive(Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
