use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use entity::sea_orm_active_enums::OrganizerLevel;
use uuid::Uuid;

use crate::server::model::organizer::Organizer;

pub struct OrganizerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrganizerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches a user to an event at the given level.
    ///
    /// # Returns
    /// - `Err(DbErr)` - Includes the primary key violation when the user is already attached
    pub async fn add(
        &self,
        event_id: Uuid,
        user_id: Uuid,
        level: OrganizerLevel,
    ) -> Result<Organizer, DbErr> {
        let model = entity::event_organizer::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            level: ActiveValue::Set(level),
        }
        .insert(self.db)
        .await?;

        Ok(Organizer::from_entity(model))
    }

    pub async fn find(&self, event_id: Uuid, user_id: Uuid) -> Result<Option<Organizer>, DbErr> {
        Ok(
            entity::prelude::EventOrganizer::find_by_id((event_id, user_id))
                .one(self.db)
                .await?
                .map(Organizer::from_entity),
        )
    }

    pub async fn get_by_event(&self, event_id: Uuid) -> Result<Vec<Organizer>, DbErr> {
        Ok(entity::prelude::EventOrganizer::find()
            .filter(entity::event_organizer::Column::EventId.eq(event_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(Organizer::from_entity)
            .collect())
    }

    /// Changes the level of an attached organizer.
    ///
    /// # Returns
    /// - `Ok(true)` - Level updated
    /// - `Ok(false)` - The user is not an organizer of the event
    pub async fn update_level(
        &self,
        event_id: Uuid,
        user_id: Uuid,
        level: OrganizerLevel,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::EventOrganizer::update_many()
            .set(entity::event_organizer::ActiveModel {
                level: ActiveValue::Set(level),
                ..Default::default()
            })
            .filter(entity::event_organizer::Column::EventId.eq(event_id))
            .filter(entity::event_organizer::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn remove(&self, event_id: Uuid, user_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::EventOrganizer::delete_by_id((event_id, user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
