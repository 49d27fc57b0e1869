use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::event::{CreateEventParams, Event, UpdateEventParams};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new event with zeroed capacity counters.
    ///
    /// Flash events without an explicit entry QR code use their own id as code.
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, DbErr> {
        let id = Uuid::new_v4();
        let entry_qr_code = match params.entry_qr_code {
            Some(code) => Some(code),
            None if params.event_type == entity::sea_orm_active_enums::EventType::Flash => {
                Some(id.to_string())
            }
            None => None,
        };

        let model = entity::event::ActiveModel {
            id: ActiveValue::Set(id),
            owner_id: ActiveValue::Set(params.owner_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            categories: ActiveValue::Set(encode_json(&params.categories)?),
            date: ActiveValue::Set(params.date),
            address: ActiveValue::Set(params.location.address),
            city: ActiveValue::Set(params.location.city),
            state: ActiveValue::Set(params.location.state),
            country: ActiveValue::Set(params.location.country),
            additional_info: ActiveValue::Set(params.location.additional_info),
            capacity_max: ActiveValue::Set(params.capacity_max),
            capacity_current: ActiveValue::Set(0),
            capacity_total: ActiveValue::Set(0),
            schedule_start: ActiveValue::Set(params.schedule_start),
            schedule_end: ActiveValue::Set(params.schedule_end),
            event_type: ActiveValue::Set(params.event_type),
            inscription_tiers: ActiveValue::Set(encode_json(&params.inscription_tiers)?),
            certificates: ActiveValue::Set(params.certificates),
            certificate_template_name: ActiveValue::Set(params.certificate_template.template_name),
            certificate_course_name: ActiveValue::Set(params.certificate_template.course_name),
            certificate_course_description: ActiveValue::Set(
                params.certificate_template.course_description,
            ),
            contents: ActiveValue::Set(encode_json(&params.contents)?),
            entry_qr_code: ActiveValue::Set(entry_qr_code),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Event::from_entity(model)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, DbErr> {
        entity::prelude::Event::find_by_id(id)
            .one(self.db)
            .await?
            .map(Event::from_entity)
            .transpose()
    }

    /// Finds an event by its entry QR code.
    pub async fn find_by_entry_code(&self, code: &str) -> Result<Option<Event>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::EntryQrCode.eq(code))
            .one(self.db)
            .await?
            .map(Event::from_entity)
            .transpose()
    }

    /// Gets all events ordered by start date.
    pub async fn get_all(&self) -> Result<Vec<Event>, DbErr> {
        entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::ScheduleStart)
            .all(self.db)
            .await?
            .into_iter()
            .map(Event::from_entity)
            .collect()
    }

    /// Updates editable fields. Capacity counters and the event type are never touched.
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - Updated event
    /// - `Ok(None)` - No event with that id
    pub async fn update(&self, id: Uuid, params: UpdateEventParams) -> Result<Option<Event>, DbErr> {
        let Some(model) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::event::ActiveModel = model.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(categories) = params.categories {
            active.categories = ActiveValue::Set(encode_json(&categories)?);
        }
        if let Some(date) = params.date {
            active.date = ActiveValue::Set(date);
        }
        if let Some(location) = params.location {
            active.address = ActiveValue::Set(location.address);
            active.city = ActiveValue::Set(location.city);
            active.state = ActiveValue::Set(location.state);
            active.country = ActiveValue::Set(location.country);
            active.additional_info = ActiveValue::Set(location.additional_info);
        }
        if let Some(max) = params.capacity_max {
            active.capacity_max = ActiveValue::Set(max);
        }
        if let Some((start, end)) = params.schedules {
            active.schedule_start = ActiveValue::Set(start);
            active.schedule_end = ActiveValue::Set(end);
        }
        if let Some(tiers) = params.inscription_tiers {
            active.inscription_tiers = ActiveValue::Set(encode_json(&tiers)?);
        }
        if let Some(certificates) = params.certificates {
            active.certificates = ActiveValue::Set(certificates);
        }
        if let Some(template) = params.certificate_template {
            active.certificate_template_name = ActiveValue::Set(template.template_name);
            active.certificate_course_name = ActiveValue::Set(template.course_name);
            active.certificate_course_description = ActiveValue::Set(template.course_description);
        }
        if let Some(contents) = params.contents {
            active.contents = ActiveValue::Set(encode_json(&contents)?);
        }

        let model = active.update(self.db).await?;

        Event::from_entity(model).map(Some)
    }

    /// Deletes an event; organizers, inscriptions and participations cascade.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected == 1)
    }

    /// Reserves one capacity slot if the event is not full.
    ///
    /// # Returns
    /// - `Ok(true)` - Slot reserved, `capacity_current` incremented
    /// - `Ok(false)` - Event is full or does not exist
    pub async fn reserve_slot(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::update_many()
            .col_expr(
                entity::event::Column::CapacityCurrent,
                Expr::cust("capacity_current + 1"),
            )
            .filter(entity::event::Column::Id.eq(id))
            .filter(Expr::cust("capacity_current < capacity_max"))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Releases one capacity slot, never going below zero.
    pub async fn release_slot(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::update_many()
            .col_expr(
                entity::event::Column::CapacityCurrent,
                Expr::cust("capacity_current - 1"),
            )
            .filter(entity::event::Column::Id.eq(id))
            .filter(entity::event::Column::CapacityCurrent.gt(0))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Counts one more check-in on the event.
    pub async fn record_entry(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Event::update_many()
            .col_expr(
                entity::event::Column::CapacityTotal,
                Expr::cust("capacity_total + 1"),
            )
            .filter(entity::event::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}

fn encode_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, DbErr> {
    serde_json::to_value(value).map_err(|e| DbErr::Custom(format!("Failed to encode JSON: {}", e)))
}
