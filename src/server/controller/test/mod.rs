use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;
use uuid::Uuid;

use crate::server::{
    error::AppError, router::router, state::AppState, util::token::issue_token,
};


const SECRET: &str = "router-secret";

/// Builds the full router over the test database.
fn app(db: &DatabaseConnection) -> Router {
    let upload_dir = std::env::temp_dir().join(format!("eventpro-uploads-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&upload_dir).unwrap();
    router().with_state(AppState::new(
        db.clone(),
        SECRET,
        "http://localhost:3000",
        upload_dir,
    ))
}

fn bearer(user_id: Uuid) -> String {
    format!("Bearer {}", issue_token(user_id, SECRET).unwrap())
}

/// Builds a JSON request, authenticated when a user is given.
fn request(method: Method, uri: &str, user_id: Option<Uuid>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header(header::AUTHORIZATION, bearer(user_id));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends a request and returns the status with the parsed JSON body (`Null` when empty).
async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
