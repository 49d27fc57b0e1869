//! FAQ factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a FAQ entry with a unique question.
pub async fn create_faq(db: &DatabaseConnection) -> Result<entity::faq::Model, DbErr> {
    let id = next_id();
    let now = Utc::now();
    entity::faq::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        question: ActiveValue::Set(format!("Question {}?", id)),
        answer: ActiveValue::Set(format!("Answer {}.", id)),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
