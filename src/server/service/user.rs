//! User service for account management.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User},
    util::password::{hash_password, validate_password},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user from a plain text password.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user
    /// - `Err(AppError::BadRequest)` - Missing fields, malformed email or weak password
    /// - `Err(AppError::Conflict)` - Email or cpf already registered
    pub async fn create(&self, mut params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        params.validate().map_err(AppError::BadRequest)?;
        validate_password(&params.password).map_err(AppError::BadRequest)?;

        if user_repo.email_exists(&params.email).await? {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }
        if user_repo.cpf_exists(&params.cpf).await? {
            return Err(AppError::Conflict("CPF is already registered".to_string()));
        }

        params.password = hash_password(&params.password)?;
        let user = user_repo
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "Email or CPF is already registered"))?;

        Ok(User::from_entity(user))
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(User::from_entity)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn update(&self, id: Uuid, params: UpdateUserParams) -> Result<User, AppError> {
        let blank = [&params.name, &params.lastname, &params.phone]
            .into_iter()
            .any(|field| matches!(field, Some(value) if value.is_empty()));
        if blank {
            return Err(AppError::BadRequest("Fields cannot be blank".to_string()));
        }

        UserRepository::new(self.db)
            .update(id, params)
            .await?
            .map(User::from_entity)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
