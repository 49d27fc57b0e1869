//! Participation factory for creating flash-event attendance records.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::ParticipationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a participation of `user_id` at `event_id` in the given status.
///
/// A `Checkin` or `Checkout` status gets its entry timestamp stamped to now.
///
/// # Returns
/// - `Ok(entity::participation::Model)` - Created participation entity
/// - `Err(DbErr)` - Database error during insert (including a duplicate (user, event) pair)
pub async fn create_participation(
    db: &DatabaseConnection,
    user_id: Uuid,
    event_id: Uuid,
    status: ParticipationStatus,
) -> Result<entity::participation::Model, DbErr> {
    let now = Utc::now();
    let checkin_in = matches!(
        status,
        ParticipationStatus::Checkin | ParticipationStatus::Checkout
    )
    .then_some(now);
    let checkin_out = (status == ParticipationStatus::Checkout).then_some(now);

    entity::participation::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        user_id: ActiveValue::Set(user_id),
        event_id: ActiveValue::Set(event_id),
        name: ActiveValue::Set("Flash Attendee".to_string()),
        email: ActiveValue::Set("attendee@example.com".to_string()),
        date_of_birth: ActiveValue::Set(NaiveDate::from_ymd_opt(1995, 5, 20).unwrap_or_default()),
        document: ActiveValue::Set("987.654.321-00".to_string()),
        status: ActiveValue::Set(status),
        checkin_in: ActiveValue::Set(checkin_in),
        checkin_out: ActiveValue::Set(checkin_out),
        avaliation_note: ActiveValue::Set(None),
        avaliation_comment: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
