//! Event fixtures for creating in-memory test data.

use chrono::{Duration, TimeZone, Utc};
use entity::{event, sea_orm_active_enums::EventType};
use serde_json::json;
use uuid::Uuid;

/// Default test event name.
pub const DEFAULT_NAME: &str = "Rust Meetup";

/// Default maximum capacity.
pub const DEFAULT_CAPACITY_MAX: i32 = 50;

/// Creates a standard event entity model with default values.
///
/// # Default Values
/// - name: `"Rust Meetup"`
/// - schedule: 2030-03-10 19:00 UTC to 22:00 UTC
/// - capacity: 0 of 50, nobody admitted yet
/// - one free inscription tier
pub fn entity() -> event::Model {
    let start = Utc
        .with_ymd_and_hms(2030, 3, 10, 19, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    event::Model {
        id: Uuid::new_v4(),
        owner_id: Uuid::new_v4(),
        name: DEFAULT_NAME.to_string(),
        description: "Monthly meetup".to_string(),
        categories: json!(["Tecnologia", "Comunidade"]),
        date: start,
        address: "Av. Paulista, 1000".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
        country: "Brasil".to_string(),
        additional_info: None,
        capacity_max: DEFAULT_CAPACITY_MAX,
        capacity_current: 0,
        capacity_total: 0,
        schedule_start: start,
        schedule_end: start + Duration::hours(3),
        event_type: EventType::Standard,
        inscription_tiers: json!([{ "price": 0.0, "type": "free", "discount": 0.0 }]),
        certificates: true,
        certificate_template_name: "Classic".to_string(),
        certificate_course_name: "Rust".to_string(),
        certificate_course_description: "Introductory talks".to_string(),
        contents: json!([{ "title": "Opening", "description": "Welcome" }]),
        entry_qr_code: None,
        created_at: start - Duration::days(30),
    }
}
