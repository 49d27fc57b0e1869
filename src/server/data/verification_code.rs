use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Expiring store of registration verification codes, keyed by email.
pub struct VerificationCodeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VerificationCodeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a code for the email, replacing any previous one.
    pub async fn upsert(
        &self,
        email: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::VerificationCode::insert(entity::verification_code::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            code: ActiveValue::Set(code.to_string()),
            expires_at: ActiveValue::Set(expires_at),
        })
        .on_conflict(
            OnConflict::column(entity::verification_code::Column::Email)
                .update_columns([
                    entity::verification_code::Column::Code,
                    entity::verification_code::Column::ExpiresAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    #[cfg(test)]
    pub async fn find(
        &self,
        email: &str,
    ) -> Result<Option<entity::verification_code::Model>, DbErr> {
        entity::prelude::VerificationCode::find_by_id(email.to_string())
            .one(self.db)
            .await
    }

    /// Consumes a code: deletes it only if it matches and has not expired.
    ///
    /// # Returns
    /// - `Ok(true)` - Code was valid and is now gone
    /// - `Ok(false)` - No matching unexpired code
    pub async fn consume(&self, email: &str, code: &str, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::VerificationCode::delete_many()
            .filter(entity::verification_code::Column::Email.eq(email))
            .filter(entity::verification_code::Column::Code.eq(code))
            .filter(entity::verification_code::Column::ExpiresAt.gt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes every expired code.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of codes purged
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::VerificationCode::delete_many()
            .filter(entity::verification_code::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
