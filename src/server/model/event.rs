//! Event domain models and parameters.
//!
//! Categories, inscription tiers and contents are stored as JSON columns; they are decoded
//! into typed values here so that malformed rows surface as errors at the repository
//! boundary instead of leaking into responses.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::EventType;
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::event::{
    CapacityDto, CertificateTemplateDto, ContentDto, CreateEventDto, EventDto, InscriptionTierDto,
    LocationDto, SchedulesDto, TierType, UpdateEventDto,
};

/// Price tier attendees can register under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InscriptionTier {
    pub price: f64,
    #[serde(rename = "type")]
    pub tier_type: TierType,
    #[serde(default)]
    pub discount: f64,
}

impl From<InscriptionTierDto> for InscriptionTier {
    fn from(dto: InscriptionTierDto) -> Self {
        Self {
            price: dto.price,
            tier_type: dto.tier_type,
            discount: dto.discount,
        }
    }
}

/// Program item of an event (talk, workshop, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<ContentDto> for Content {
    fn from(dto: ContentDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub additional_info: Option<String>,
}

impl From<LocationDto> for Location {
    fn from(dto: LocationDto) -> Self {
        Self {
            address: dto.address,
            city: dto.city,
            state: dto.state,
            country: dto.country,
            additional_info: dto.additional_info,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CertificateTemplate {
    pub template_name: String,
    pub course_name: String,
    pub course_description: String,
}

impl From<CertificateTemplateDto> for CertificateTemplate {
    fn from(dto: CertificateTemplateDto) -> Self {
        Self {
            template_name: dto.template_name,
            course_name: dto.course_name,
            course_description: dto.course_description,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub categories: Vec<String>,
    pub date: DateTime<Utc>,
    pub location: Location,
    /// Maximum number of active inscriptions.
    pub capacity_max: i32,
    /// Active (non-canceled) inscriptions.
    pub capacity_current: i32,
    /// Check-ins performed.
    pub capacity_total: i32,
    pub schedule_start: DateTime<Utc>,
    pub schedule_end: DateTime<Utc>,
    pub event_type: EventType,
    pub inscription_tiers: Vec<InscriptionTier>,
    pub certificates: bool,
    pub certificate_template: CertificateTemplate,
    pub contents: Vec<Content>,
    pub entry_qr_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Event)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - A JSON column does not hold the expected shape
    pub fn from_entity(entity: entity::event::Model) -> Result<Self, DbErr> {
        let categories = decode_json(entity.categories, "categories")?;
        let inscription_tiers = decode_json(entity.inscription_tiers, "inscription_tiers")?;
        let contents = decode_json(entity.contents, "contents")?;

        Ok(Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            description: entity.description,
            categories,
            date: entity.date,
            location: Location {
                address: entity.address,
                city: entity.city,
                state: entity.state,
                country: entity.country,
                additional_info: entity.additional_info,
            },
            capacity_max: entity.capacity_max,
            capacity_current: entity.capacity_current,
            capacity_total: entity.capacity_total,
            schedule_start: entity.schedule_start,
            schedule_end: entity.schedule_end,
            event_type: entity.event_type,
            inscription_tiers,
            certificates: entity.certificates,
            certificate_template: CertificateTemplate {
                template_name: entity.certificate_template_name,
                course_name: entity.certificate_course_name,
                course_description: entity.certificate_course_description,
            },
            contents,
            entry_qr_code: entity.entry_qr_code,
            created_at: entity.created_at,
        })
    }

    pub fn is_flash(&self) -> bool {
        self.event_type == EventType::Flash
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            user_id: self.owner_id,
            name: self.name,
            description: self.description,
            categories: self.categories,
            date: self.date,
            location: LocationDto {
                address: self.location.address,
                city: self.location.city,
                state: self.location.state,
                country: self.location.country,
                additional_info: self.location.additional_info,
            },
            capacity: CapacityDto {
                max: self.capacity_max,
                current: self.capacity_current,
                total: self.capacity_total,
            },
            schedules: SchedulesDto {
                start: self.schedule_start,
                end: self.schedule_end,
            },
            event_type: self.event_type,
            inscription_tiers: self
                .inscription_tiers
                .into_iter()
                .map(|tier| InscriptionTierDto {
                    price: tier.price,
                    tier_type: tier.tier_type,
                    discount: tier.discount,
                })
                .collect(),
            certificates: self.certificates,
            certificate_template: CertificateTemplateDto {
                template_name: self.certificate_template.template_name,
                course_name: self.certificate_template.course_name,
                course_description: self.certificate_template.course_description,
            },
            contents: self
                .contents
                .into_iter()
                .map(|content| ContentDto {
                    title: content.title,
                    description: content.description,
                })
                .collect(),
            entry_qr_code: self.entry_qr_code,
            created_at: self.created_at,
        }
    }
}

fn decode_json<T: serde::de::DeserializeOwned>(
    value: serde_json::Value,
    column: &str,
) -> Result<T, DbErr> {
    serde_json::from_value(value)
        .map_err(|e| DbErr::Custom(format!("Failed to decode event {}: {}", column, e)))
}

#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub categories: Vec<String>,
    pub date: DateTime<Utc>,
    pub location: Location,
    pub capacity_max: i32,
    pub schedule_start: DateTime<Utc>,
    pub schedule_end: DateTime<Utc>,
    pub event_type: EventType,
    pub inscription_tiers: Vec<InscriptionTier>,
    pub certificates: bool,
    pub certificate_template: CertificateTemplate,
    pub contents: Vec<Content>,
    pub entry_qr_code: Option<String>,
}

impl CreateEventParams {
    /// Builds creation parameters. Incoming `capacity.current` and `capacity.total` are
    /// ignored; counters always start at zero.
    pub fn from_dto(owner_id: Uuid, dto: CreateEventDto) -> Self {
        Self {
            owner_id,
            name: dto.name.trim().to_string(),
            description: dto.description,
            categories: dto.categories,
            date: dto.date,
            location: dto.location.into(),
            capacity_max: dto.capacity.max,
            schedule_start: dto.schedules.start,
            schedule_end: dto.schedules.end,
            event_type: dto.event_type,
            inscription_tiers: dto.inscription_tiers.into_iter().map(Into::into).collect(),
            certificates: dto.certificates,
            certificate_template: dto.certificate_template.into(),
            contents: dto.contents.into_iter().map(Into::into).collect(),
            entry_qr_code: dto
                .entry_qr_code
                .map(|code| code.trim().to_string())
                .filter(|code| !code.is_empty()),
        }
    }

    /// Checks the creation rules.
    ///
    /// # Returns
    /// - `Ok(())` - Parameters describe a valid event
    /// - `Err(String)` - Reason the event cannot be created
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Event name is required".to_string());
        }
        if self.capacity_max <= 0 {
            return Err("Capacity must be greater than zero".to_string());
        }
        if self.schedule_end < self.schedule_start {
            return Err("Schedule end must not precede its start".to_string());
        }
        if self.event_type != EventType::Flash && self.inscription_tiers.is_empty() {
            return Err("At least one inscription tier is required".to_string());
        }
        validate_tiers(&self.inscription_tiers)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEventParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub categories: Option<Vec<String>>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<Location>,
    pub capacity_max: Option<i32>,
    pub schedules: Option<(DateTime<Utc>, DateTime<Utc>)>,
    pub inscription_tiers: Option<Vec<InscriptionTier>>,
    pub certificates: Option<bool>,
    pub certificate_template: Option<CertificateTemplate>,
    pub contents: Option<Vec<Content>>,
}

impl UpdateEventParams {
    pub fn from_dto(dto: UpdateEventDto) -> Self {
        Self {
            name: dto.name.map(|name| name.trim().to_string()),
            description: dto.description,
            categories: dto.categories,
            date: dto.date,
            location: dto.location.map(Into::into),
            capacity_max: dto.capacity_max,
            schedules: dto.schedules.map(|s| (s.start, s.end)),
            inscription_tiers: dto
                .inscription_tiers
                .map(|tiers| tiers.into_iter().map(Into::into).collect()),
            certificates: dto.certificates,
            certificate_template: dto.certificate_template.map(Into::into),
            contents: dto
                .contents
                .map(|contents| contents.into_iter().map(Into::into).collect()),
        }
    }

    /// Checks the update against the current state of the event.
    pub fn validate(&self, current: &Event) -> Result<(), String> {
        if matches!(&self.name, Some(name) if name.is_empty()) {
            return Err("Event name is required".to_string());
        }
        if let Some(max) = self.capacity_max {
            if max <= 0 {
                return Err("Capacity must be greater than zero".to_string());
            }
            if max < current.capacity_current {
                return Err(format!(
                    "Capacity cannot be lower than the {} active inscriptions",
                    current.capacity_current
                ));
            }
        }
        if let Some((start, end)) = self.schedules {
            if end < start {
                return Err("Schedule end must not precede its start".to_string());
            }
        }
        if let Some(tiers) = &self.inscription_tiers {
            if !current.is_flash() && tiers.is_empty() {
                return Err("At least one inscription tier is required".to_string());
            }
            validate_tiers(tiers)?;
        }
        Ok(())
    }
}

fn validate_tiers(tiers: &[InscriptionTier]) -> Result<(), String> {
    if tiers.iter().any(|tier| tier.price < 0.0 || tier.discount < 0.0) {
        return Err("Tier price and discount must not be negative".to_string());
    }
    Ok(())
}
