pub use super::event::Entity as Event;
pub use super::event_organizer::Entity as EventOrganizer;
pub use super::faq::Entity as Faq;
pub use super::image::Entity as Image;
pub use super::inscription::Entity as Inscription;
pub use super::participation::Entity as Participation;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
pub use super::verification_code::Entity as VerificationCode;
