//! API Routes

use axum::extract::DefaultBodyLimit;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{auth, financing, health, user};
use crate::state::AppState;

/// Request bodies above this size are rejected before parsing.
const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth routes
        .route("/api/auth/send-otp", post(auth::send_otp))
        .route("/api/auth/verify-otp", post(auth::verify_otp))
        // User routes
        .route("/api/user/full-registration", post(user::full_registration))
        .route("/api/user/status", get(user::status))
        .route("/api/user/data", get(user::data))
        // Financing routes
        .route("/api/financing/request", post(financing::request_financing))
        .route("/api/financing/requests", get(financing::list_requests))
        .route("/api/financing/request-detail", get(financing::request_detail))
        .route("/api/financing/latest", get(financing::latest_request))
        // Middleware
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
