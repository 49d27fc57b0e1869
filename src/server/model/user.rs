//! User domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::model::{
    auth::{AuthUserDto, RegisterDto},
    user::{CreateUserDto, UpdateUserDto, UserDto},
};

/// Account of a person using the platform.
///
/// The password hash and reset token never leave the service layer; they are not part of
/// the domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub lastname: String,
    pub date_of_birth: NaiveDate,
    pub cpf: String,
    pub phone: String,
    pub email: String,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            lastname: entity.lastname,
            date_of_birth: entity.date_of_birth,
            cpf: entity.cpf,
            phone: entity.phone,
            email: entity.email,
            email_verified: entity.email_verified,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Full display name used when copying user data onto attendance records.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.lastname).trim().to_string()
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            lastname: self.lastname,
            date_of_birth: self.date_of_birth,
            cpf: self.cpf,
            phone: self.phone,
            email: self.email,
            email_verified: self.email_verified,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_auth_dto(self) -> AuthUserDto {
        AuthUserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            lastname: self.lastname,
        }
    }
}

/// Parameters for inserting a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub lastname: String,
    pub date_of_birth: NaiveDate,
    pub cpf: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub email_verified: bool,
}

impl CreateUserParams {
    /// Builds parameters from the admin create endpoint. Emails are normalized to lowercase.
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            lastname: dto.lastname.trim().to_string(),
            date_of_birth: dto.date_of_birth,
            cpf: dto.cpf.trim().to_string(),
            phone: dto.phone.trim().to_string(),
            email: normalize_email(&dto.email),
            password: dto.password,
            email_verified: false,
        }
    }

    /// Builds parameters from a self registration, whose email was verified by code.
    pub fn from_register_dto(dto: RegisterDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            lastname: dto.lastname.trim().to_string(),
            date_of_birth: dto.date_of_birth,
            cpf: dto.cpf.trim().to_string(),
            phone: dto.phone.trim().to_string(),
            email: normalize_email(&dto.email),
            password: dto.password,
            email_verified: true,
        }
    }

    /// Checks that no required field is blank and the email looks like one.
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("name", &self.name),
            ("lastname", &self.lastname),
            ("cpf", &self.cpf),
            ("phone", &self.phone),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(format!("Field '{}' is required", field));
        }

        if !is_plausible_email(&self.email) {
            return Err("Invalid email".to_string());
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name.map(|v| v.trim().to_string()),
            lastname: dto.lastname.map(|v| v.trim().to_string()),
            phone: dto.phone.map(|v| v.trim().to_string()),
            date_of_birth: dto.date_of_birth,
        }
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Cheap structural check: one `@` with a non-empty local part and a dotted domain.
pub fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
