use crate::server::{
    error::AppError,
    model::{
        attendance::AttendanceOutcome,
        event::{CreateEventParams, Event},
    },
    service::{attendance::AttendanceService, event::EventService},
};
use entity::sea_orm_active_enums::EventType;
use test_utils::{builder::TestBuilder, factory, fixture};
use uuid::Uuid;

mod create;

/// Flash event parameters for `owner_id` with the given name and entry code.
fn flash_params(owner_id: Uuid, name: &str, entry_qr_code: Option<&str>) -> CreateEventParams {
    let template = Event::from_entity(fixture::event::entity()).unwrap();
    CreateEventParams {
        owner_id,
        name: name.to_string(),
        description: template.description,
        categories: template.categories,
        date: template.date,
        location: template.location,
        capacity_max: template.capacity_max,
        schedule_start: template.schedule_start,
        schedule_end: template.schedule_end,
        event_type: EventType::Flash,
        inscription_tiers: Vec::new(),
        certificates: false,
        certificate_template: template.certificate_template,
        contents: template.contents,
        entry_qr_code: entry_qr_code.map(str::to_string),
    }
}
