use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{InscriptionStatus, ParticipationStatus};
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::{
    attendance::{INSCRIPTION_BLOCKED_STATUSES, INSCRIPTION_ENTRY_STATUSES},
    inscription::{Avaliation, CreateInscriptionParams, Inscription, InscriptionFilter},
};

pub struct InscriptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InscriptionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending inscription. Capacity is reserved separately by the caller.
    pub async fn create(&self, params: CreateInscriptionParams) -> Result<Inscription, DbErr> {
        let now = Utc::now();

        let model = entity::inscription::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.user_id),
            event_id: ActiveValue::Set(params.event_id),
            for_another_one: ActiveValue::Set(params.for_another_one),
            participant_name: ActiveValue::Set(params.participant.name),
            participant_email: ActiveValue::Set(params.participant.email),
            participant_date_of_birth: ActiveValue::Set(params.participant.date_of_birth),
            participant_document: ActiveValue::Set(params.participant.document),
            status: ActiveValue::Set(InscriptionStatus::Pending),
            participation_status: ActiveValue::Set(ParticipationStatus::Pending),
            checkin_in: ActiveValue::Set(None),
            checkin_out: ActiveValue::Set(None),
            certificate_document: ActiveValue::Set(None),
            certificate_status: ActiveValue::Set(None),
            avaliation_note: ActiveValue::Set(None),
            avaliation_comment: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Inscription::from_entity(model))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Inscription>, DbErr> {
        Ok(entity::prelude::Inscription::find_by_id(id)
            .one(self.db)
            .await?
            .map(Inscription::from_entity))
    }

    /// Lists inscriptions, newest first, optionally narrowed by event and user.
    pub async fn get_all(&self, filter: InscriptionFilter) -> Result<Vec<Inscription>, DbErr> {
        let mut query = entity::prelude::Inscription::find();
        if let Some(event_id) = filter.event_id {
            query = query.filter(entity::inscription::Column::EventId.eq(event_id));
        }
        if let Some(user_id) = filter.user_id {
            query = query.filter(entity::inscription::Column::UserId.eq(user_id));
        }

        Ok(query
            .order_by_desc(entity::inscription::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Inscription::from_entity)
            .collect())
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Inscription::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Checks an inscription in.
    ///
    /// Guard: status is PENDING or CONFIRMED and presence is PENDING. Sets presence to
    /// CHECKIN, stamps the entry time and consumes the ticket (status USED).
    ///
    /// # Returns
    /// - `Ok(true)` - This call performed the transition
    /// - `Ok(false)` - Missing row or guard failed; re-read to learn why
    pub async fn check_in(&self, id: Uuid, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Inscription::update_many()
            .set(entity::inscription::ActiveModel {
                status: ActiveValue::Set(InscriptionStatus::Used),
                participation_status: ActiveValue::Set(ParticipationStatus::Checkin),
                checkin_in: ActiveValue::Set(Some(now)),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::inscription::Column::Id.eq(id))
            .filter(entity::inscription::Column::Status.is_in(INSCRIPTION_ENTRY_STATUSES))
            .filter(
                entity::inscription::Column::ParticipationStatus.eq(ParticipationStatus::Pending),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Checks an inscription out.
    ///
    /// Guard: presence is CHECKIN and status is neither CANCELED nor EXPIRED.
    pub async fn check_out(&self, id: Uuid, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Inscription::update_many()
            .set(entity::inscription::ActiveModel {
                participation_status: ActiveValue::Set(ParticipationStatus::Checkout),
                checkin_out: ActiveValue::Set(Some(now)),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::inscription::Column::Id.eq(id))
            .filter(
                entity::inscription::Column::ParticipationStatus.eq(ParticipationStatus::Checkin),
            )
            .filter(entity::inscription::Column::Status.is_not_in(INSCRIPTION_BLOCKED_STATUSES))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Cancels an inscription. Guard: not already CANCELED.
    pub async fn cancel(&self, id: Uuid, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Inscription::update_many()
            .set(entity::inscription::ActiveModel {
                status: ActiveValue::Set(InscriptionStatus::Canceled),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::inscription::Column::Id.eq(id))
            .filter(entity::inscription::Column::Status.ne(InscriptionStatus::Canceled))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Stores the attendee's rating.
    pub async fn rate(&self, id: Uuid, avaliation: Avaliation) -> Result<Option<Inscription>, DbErr> {
        let Some(model) = entity::prelude::Inscription::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::inscription::ActiveModel = model.into();
        active.avaliation_note = ActiveValue::Set(Some(avaliation.note));
        active.avaliation_comment = ActiveValue::Set(avaliation.comment);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Inscription::from_entity(active.update(self.db).await?)))
    }

    /// Expires inscriptions of finished events that were never used.
    ///
    /// A single conditional update marks every PENDING/CONFIRMED inscription whose presence
    /// is still PENDING and whose event ended before `now` as EXPIRED with presence NO_SHOW.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of inscriptions expired
    pub async fn expire_no_shows(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let ended_events = Query::select()
            .column(entity::event::Column::Id)
            .from(entity::prelude::Event)
            .and_where(entity::event::Column::ScheduleEnd.lt(now))
            .to_owned();

        let result = entity::prelude::Inscription::update_many()
            .set(entity::inscription::ActiveModel {
                status: ActiveValue::Set(InscriptionStatus::Expired),
                participation_status: ActiveValue::Set(ParticipationStatus::NoShow),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::inscription::Column::Status.is_in(INSCRIPTION_ENTRY_STATUSES))
            .filter(
                entity::inscription::Column::ParticipationStatus.eq(ParticipationStatus::Pending),
            )
            .filter(entity::inscription::Column::EventId.in_subquery(ended_events))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
