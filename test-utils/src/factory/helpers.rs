//! Shared helper utilities for factory methods.

use entity::sea_orm_active_enums::EventType;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to derive unique emails and CPFs so factories never collide on unique columns.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an owner, a standard event and a pending inscription of that owner.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, event, inscription))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_inscription_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::event::Model,
        entity::inscription::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let event = crate::factory::event::create_event(db, user.id).await?;
    let inscription = crate::factory::inscription::create_inscription(db, user.id, event.id).await?;

    Ok((user, event, inscription))
}

/// Creates an owner, a flash event and a separate attendee user.
///
/// # Returns
/// - `Ok((owner, event, attendee))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_flash_event_with_attendee(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::event::Model,
        entity::user::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let event = crate::factory::event::EventFactory::new(db, owner.id)
        .event_type(EventType::Flash)
        .build()
        .await?;
    let attendee = crate::factory::user::create_user(db).await?;

    Ok((owner, event, attendee))
}
