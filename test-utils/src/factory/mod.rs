//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows directly, so parent rows (users,
//! events) must exist before children are created.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let event = factory::event::create_event(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (user, event, inscription) =
//!         factory::helpers::create_inscription_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let event = factory::event::EventFactory::new(&db, owner.id)
//!     .event_type(EventType::Flash)
//!     .capacity_max(1)
//!     .build()
//!     .await?;
//! ```

pub mod event;
pub mod faq;
pub mod helpers;
pub mod inscription;
pub mod participation;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use event::{create_event, create_flash_event};
pub use faq::create_faq;
pub use inscription::create_inscription;
pub use participation::create_participation;
pub use user::create_user;
