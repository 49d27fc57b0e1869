//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::EventType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;
use uuid::Uuid;

/// Factory for creating test events with customizable fields.
///
/// Defaults describe a standard event starting in one day, lasting eight hours, with a
/// capacity of 100 and a single free inscription tier.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: Uuid,
    name: String,
    event_type: EventType,
    capacity_max: i32,
    capacity_current: i32,
    schedule_start: DateTime<Utc>,
    schedule_end: DateTime<Utc>,
}

impl<'a> EventFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: Uuid) -> Self {
        let id = next_id();
        let start = Utc::now() + Duration::days(1);
        Self {
            db,
            owner_id,
            name: format!("Event {}", id),
            event_type: EventType::Standard,
            capacity_max: 100,
            capacity_current: 0,
            schedule_start: start,
            schedule_end: start + Duration::hours(8),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn capacity_max(mut self, capacity_max: i32) -> Self {
        self.capacity_max = capacity_max;
        self
    }

    pub fn capacity_current(mut self, capacity_current: i32) -> Self {
        self.capacity_current = capacity_current;
        self
    }

    /// Sets the schedule window of the event.
    pub fn schedule(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.schedule_start = start;
        self.schedule_end = end;
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// Flash events receive their own id as entry QR code.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let id = Uuid::new_v4();
        let tiers = if self.event_type == EventType::Flash {
            json!([])
        } else {
            json!([{ "price": 0.0, "type": "free", "discount": 0.0 }])
        };
        let entry_qr_code = (self.event_type == EventType::Flash).then(|| id.to_string());

        entity::event::ActiveModel {
            id: ActiveValue::Set(id),
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set("Test event description".to_string()),
            categories: ActiveValue::Set(json!(["Tecnologia"])),
            date: ActiveValue::Set(self.schedule_start),
            address: ActiveValue::Set("Rua Exemplo, 123".to_string()),
            city: ActiveValue::Set("São Paulo".to_string()),
            state: ActiveValue::Set("SP".to_string()),
            country: ActiveValue::Set("Brasil".to_string()),
            additional_info: ActiveValue::Set(None),
            capacity_max: ActiveValue::Set(self.capacity_max),
            capacity_current: ActiveValue::Set(self.capacity_current),
            capacity_total: ActiveValue::Set(0),
            schedule_start: ActiveValue::Set(self.schedule_start),
            schedule_end: ActiveValue::Set(self.schedule_end),
            event_type: ActiveValue::Set(self.event_type),
            inscription_tiers: ActiveValue::Set(tiers),
            certificates: ActiveValue::Set(false),
            certificate_template_name: ActiveValue::Set("Default".to_string()),
            certificate_course_name: ActiveValue::Set("Course".to_string()),
            certificate_course_description: ActiveValue::Set("Course description".to_string()),
            contents: ActiveValue::Set(json!([])),
            entry_qr_code: ActiveValue::Set(entry_qr_code),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a standard event owned by `owner_id`.
pub async fn create_event(
    db: &DatabaseConnection,
    owner_id: Uuid,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, owner_id).build().await
}

/// Creates a flash event owned by `owner_id`.
pub async fn create_flash_event(
    db: &DatabaseConnection,
    owner_id: Uuid,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, owner_id)
        .event_type(EventType::Flash)
        .build()
        .await
}
