use axum::http::{header::AUTHORIZATION, HeaderMap};
use entity::sea_orm_active_enums::OrganizerLevel;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{event::EventRepository, organizer::OrganizerRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::User,
    util::token::verify_token,
};

pub enum Permission {
    /// Owner of the event.
    EventOwner(Uuid),
    /// Owner of the event or one of its admin organizers.
    EventManage(Uuid),
    /// Owner of a record, or a manager of the event the record belongs to.
    RecordOwnerOrEventManager { owner_id: Uuid, event_id: Uuid },
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt_secret: &'a str,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt_secret: &'a str, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            jwt_secret,
            headers,
        }
    }

    /// Authenticates the request and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all permissions
    /// - `Err(AppError::AuthErr)` - Missing, invalid or expired token, unknown user or
    ///   denied permission
    /// - `Err(AppError::NotFound)` - A permission names an event that does not exist
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = bearer_token(self.headers)?;
        let user_id = verify_token(token, self.jwt_secret)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            self.check(user.id, permission).await?;
        }

        Ok(User::from_entity(user))
    }

    /// Checks a single permission for an already authenticated user.
    pub async fn check(&self, user_id: Uuid, permission: &Permission) -> Result<(), AppError> {
        match permission {
            Permission::EventOwner(event_id) => {
                let owner_id = self.event_owner(*event_id).await?;
                if owner_id != user_id {
                    return Err(AuthError::AccessDenied(
                        user_id,
                        format!("requires ownership of event {}", event_id),
                    )
                    .into());
                }
            }
            Permission::EventManage(event_id) => {
                if !self.manages_event(user_id, *event_id).await? {
                    return Err(AuthError::AccessDenied(
                        user_id,
                        format!("requires management rights on event {}", event_id),
                    )
                    .into());
                }
            }
            Permission::RecordOwnerOrEventManager { owner_id, event_id } => {
                if *owner_id != user_id && !self.manages_event(user_id, *event_id).await? {
                    return Err(AuthError::AccessDenied(
                        user_id,
                        format!(
                            "record of user {} is not theirs and event {} is not managed by them",
                            owner_id, event_id
                        ),
                    )
                    .into());
                }
            }
        }

        Ok(())
    }

    async fn event_owner(&self, event_id: Uuid) -> Result<Uuid, AppError> {
        EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .map(|event| event.owner_id)
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    async fn manages_event(&self, user_id: Uuid, event_id: Uuid) -> Result<bool, AppError> {
        if self.event_owner(event_id).await? == user_id {
            return Ok(true);
        }

        let organizer = OrganizerRepository::new(self.db)
            .find(event_id, user_id)
            .await?;

        Ok(matches!(organizer, Some(o) if o.level == OrganizerLevel::Admin))
    }
}

/// Extracts the token of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let (scheme, token) = value.split_once(' ').ok_or(AuthError::MissingToken)?;
    if !scheme.eq_ignore_ascii_case("bearer") || token.trim().is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token.trim())
}
