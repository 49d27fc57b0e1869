use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::user::{CreateUserParams, UpdateUserParams};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user. `params.password` must already be hashed.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on email or cpf
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();

        entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            lastname: ActiveValue::Set(params.lastname),
            password_hash: ActiveValue::Set(params.password),
            date_of_birth: ActiveValue::Set(params.date_of_birth),
            cpf: ActiveValue::Set(params.cpf),
            phone: ActiveValue::Set(params.phone),
            email: ActiveValue::Set(params.email),
            email_verified: ActiveValue::Set(params.email_verified),
            reset_password_token: ActiveValue::Set(None),
            reset_password_expires: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn cpf_exists(&self, cpf: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Cpf.eq(cpf))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all users ordered by name.
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Lastname)
            .all(self.db)
            .await
    }

    /// Updates profile fields. Fields left as `None` are unchanged.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated user
    /// - `Ok(None)` - No user with that id
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateUserParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(lastname) = params.lastname {
            active.lastname = ActiveValue::Set(lastname);
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(phone);
        }
        if let Some(date_of_birth) = params.date_of_birth {
            active.date_of_birth = ActiveValue::Set(date_of_birth);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a user. Owned events, inscriptions and participations cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected == 1)
    }

    /// Stores a password reset token and its expiry.
    pub async fn set_reset_token(
        &self,
        id: Uuid,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .set(entity::user::ActiveModel {
                reset_password_token: ActiveValue::Set(Some(token.to_string())),
                reset_password_expires: ActiveValue::Set(Some(expires_at)),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Finds the user holding an unexpired reset token.
    pub async fn find_by_reset_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::ResetPasswordToken.eq(token))
            .filter(entity::user::Column::ResetPasswordExpires.gt(now))
            .one(self.db)
            .await
    }

    /// Replaces the password hash and consumes the reset token.
    ///
    /// The token is part of the guard so that a token can be redeemed only once.
    ///
    /// # Returns
    /// - `Ok(true)` - Password replaced
    /// - `Ok(false)` - Token was already consumed
    pub async fn reset_password(
        &self,
        id: Uuid,
        token: &str,
        password_hash: String,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .set(entity::user::ActiveModel {
                password_hash: ActiveValue::Set(password_hash),
                reset_password_token: ActiveValue::Set(None),
                reset_password_expires: ActiveValue::Set(None),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::ResetPasswordToken.eq(token))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
