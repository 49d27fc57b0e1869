use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::server::{
    controller::{
        auth::{forgot_password, login, me, register, request_verification_code, reset_password},
        event::{
            create_event, delete_event, get_event, get_events, update_event, validate_entry,
            validate_exit,
        },
        faq::{create_faq, delete_faq, get_faqs, update_faq},
        image::upload_image,
        inscription::{
            cancel_inscription, create_inscription, delete_inscription, get_inscription,
            get_inscriptions, rate_inscription,
        },
        organizer::{add_organizer, get_organizers, remove_organizer, update_organizer},
        participation::{
            delete_participation, get_participation, get_participations, update_participation,
        },
        review::{create_review, delete_review, get_reviews},
        user::{create_user, delete_user, get_user, get_users, update_user},
    },
    service::image::MAX_IMAGE_BYTES,
    state::AppState,
};

/// Room for multipart boundaries and headers on top of the image itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route(
            "/api/auth/request-verification-code",
            post(request_verification_code),
        )
        .route("/api/auth/register", post(register))
        .route("/api/auth/forgot-password", post(forgot_password))
        .route("/api/auth/reset-password", post(reset_password))
        .route("/api/auth/me", get(me))
        .route("/api/user", get(get_users).post(create_user))
        .route(
            "/api/user/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/event", get(get_events).post(create_event))
        .route(
            "/api/event/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/api/event/validate-entry/{id}", post(validate_entry))
        .route("/api/event/validate-exit/{id}", post(validate_exit))
        .route(
            "/api/organizers/event/{id}/organizer",
            get(get_organizers)
                .post(add_organizer)
                .put(update_organizer)
                .delete(remove_organizer),
        )
        .route(
            "/api/inscription",
            get(get_inscriptions).post(create_inscription),
        )
        .route(
            "/api/inscription/{id}",
            get(get_inscription).delete(delete_inscription),
        )
        .route("/api/inscription/{id}/cancel", patch(cancel_inscription))
        .route("/api/inscription/{id}/avaliation", patch(rate_inscription))
        .route("/api/participation", get(get_participations))
        .route(
            "/api/participation/{id}",
            get(get_participation)
                .put(update_participation)
                .delete(delete_participation),
        )
        .route("/api/faq", get(get_faqs).post(create_faq))
        .route("/api/faq/{id}", put(update_faq).delete(delete_faq))
        .route("/api/review", get(get_reviews).post(create_review))
        .route("/api/review/{id}", delete(delete_review))
        .route(
            "/api/images/upload",
            post(upload_image)
                .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES + MULTIPART_OVERHEAD)),
        )
}
