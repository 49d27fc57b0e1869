use entity::sea_orm_active_enums::OrganizerLevel;
use uuid::Uuid;

use crate::model::organizer::OrganizerDto;

/// Staff member attached to an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Organizer {
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub level: OrganizerLevel,
}

impl Organizer {
    pub fn from_entity(entity: entity::event_organizer::Model) -> Self {
        Self {
            event_id: entity.event_id,
            user_id: entity.user_id,
            level: entity.level,
        }
    }

    pub fn into_dto(self) -> OrganizerDto {
        OrganizerDto {
            event_id: self.event_id,
            user_id: self.user_id,
            nivel: self.level,
        }
    }
}
