//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request handler
//! through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - JWT signing secret
//! - Application URL for generating links
//! - Upload directory for images
//! - Email service for outgoing mail

use sea_orm::DatabaseConnection;
use std::{path::PathBuf, sync::Arc};

use crate::server::service::email::EmailService;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// remaining values are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Secret used to sign and verify access tokens.
    pub jwt_secret: Arc<str>,

    /// Application base URL for generating links.
    pub app_url: Arc<str>,

    /// Directory uploaded images are written to.
    pub upload_dir: Arc<PathBuf>,

    /// Outgoing email.
    pub mailer: EmailService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt_secret` - Token signing secret
    /// - `app_url` - Application base URL
    /// - `upload_dir` - Directory for uploaded images
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        jwt_secret: impl Into<Arc<str>>,
        app_url: impl Into<Arc<str>>,
        upload_dir: PathBuf,
    ) -> Self {
        Self {
            db,
            jwt_secret: jwt_secret.into(),
            app_url: app_url.into(),
            upload_dir: Arc::new(upload_dir),
            mailer: EmailService::new(),
        }
    }
}
