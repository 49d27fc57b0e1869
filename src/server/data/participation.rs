use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ParticipationStatus;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::{
    attendance::PARTICIPATION_ENTRY_STATUSES,
    participation::{
        NewParticipationParams, Participation, ParticipationFilter, UpdateParticipationParams,
    },
};

pub struct ParticipationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParticipationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a checked-in participation unless one already exists for the pair.
    ///
    /// Relies on the unique (user_id, event_id) index; concurrent first check-ins insert
    /// exactly one row.
    ///
    /// # Returns
    /// - `Ok(true)` - Row inserted by this call
    /// - `Ok(false)` - A participation already existed
    pub async fn insert_checked_in(
        &self,
        params: NewParticipationParams,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let inserted = entity::prelude::Participation::insert(entity::participation::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.user_id),
            event_id: ActiveValue::Set(params.event_id),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            date_of_birth: ActiveValue::Set(params.date_of_birth),
            document: ActiveValue::Set(params.document),
            status: ActiveValue::Set(ParticipationStatus::Checkin),
            checkin_in: ActiveValue::Set(Some(now)),
            checkin_out: ActiveValue::Set(None),
            avaliation_note: ActiveValue::Set(None),
            avaliation_comment: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::columns([
                entity::participation::Column::UserId,
                entity::participation::Column::EventId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted == 1)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Participation>, DbErr> {
        Ok(entity::prelude::Participation::find_by_id(id)
            .one(self.db)
            .await?
            .map(Participation::from_entity))
    }

    pub async fn find_by_user_and_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<Participation>, DbErr> {
        Ok(entity::prelude::Participation::find()
            .filter(entity::participation::Column::UserId.eq(user_id))
            .filter(entity::participation::Column::EventId.eq(event_id))
            .one(self.db)
            .await?
            .map(Participation::from_entity))
    }

    pub async fn get_all(&self, filter: ParticipationFilter) -> Result<Vec<Participation>, DbErr> {
        let mut query = entity::prelude::Participation::find();
        if let Some(event_id) = filter.event_id {
            query = query.filter(entity::participation::Column::EventId.eq(event_id));
        }
        if let Some(user_id) = filter.user_id {
            query = query.filter(entity::participation::Column::UserId.eq(user_id));
        }

        Ok(query
            .order_by_desc(entity::participation::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Participation::from_entity)
            .collect())
    }

    /// Checks an existing participation back in. Guard: presence PENDING or NO_SHOW.
    pub async fn check_in(&self, id: Uuid, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Participation::update_many()
            .set(entity::participation::ActiveModel {
                status: ActiveValue::Set(ParticipationStatus::Checkin),
                checkin_in: ActiveValue::Set(Some(now)),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::participation::Column::Id.eq(id))
            .filter(entity::participation::Column::Status.is_in(PARTICIPATION_ENTRY_STATUSES))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Checks a participation out. Guard: presence CHECKIN.
    pub async fn check_out(&self, id: Uuid, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Participation::update_many()
            .set(entity::participation::ActiveModel {
                status: ActiveValue::Set(ParticipationStatus::Checkout),
                checkin_out: ActiveValue::Set(Some(now)),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::participation::Column::Id.eq(id))
            .filter(entity::participation::Column::Status.eq(ParticipationStatus::Checkin))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Updates personal data and rating. Presence fields are never touched here.
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateParticipationParams,
    ) -> Result<Option<Participation>, DbErr> {
        let Some(model) = entity::prelude::Participation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::participation::ActiveModel = model.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(date_of_birth) = params.date_of_birth {
            active.date_of_birth = ActiveValue::Set(date_of_birth);
        }
        if let Some(document) = params.document {
            active.document = ActiveValue::Set(document);
        }
        if let Some(avaliation) = params.avaliation {
            active.avaliation_note = ActiveValue::Set(Some(avaliation.note));
            active.avaliation_comment = ActiveValue::Set(avaliation.comment);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Participation::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Participation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
