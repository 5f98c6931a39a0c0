//! End-to-end HTTP tests against in-process repositories

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use serde_json::{json, Value};
use sme_fin_api::{DocumentStore, FixedClock, OtpCodeSource, RepositorySet, UploadedFile};
use sme_fin_db::memory::InMemoryRepositories;
use sme_fin_server::{create_router, AppState, StateOptions};
use sqlx::Postgres;
use std::error::Error;
use std::sync::Arc;
use tower::ServiceExt;

const OTP: &str = "123456";

struct StaticStore;

#[async_trait]
impl DocumentStore for StaticStore {
    async fn upload(&self, file: &UploadedFile) -> Result<String, Box<dyn Error + Send + Sync>> {
        Ok(format!("https://files.test/{}", file.filename))
    }
}

fn app() -> Router {
    let repos = InMemoryRepositories::new();
    let set: RepositorySet<Postgres> = RepositorySet {
        accounts: repos.account_repository.clone(),
        otp_challenges: repos.otp_challenge_repository.clone(),
        personal_details: repos.personal_details_repository.clone(),
        business_details: repos.business_details_repository.clone(),
        trade_licenses: repos.trade_license_repository.clone(),
        financing_requests: repos.financing_request_repository.clone(),
    };
    let state = AppState::new(
        set,
        StateOptions {
            jwt_secret: "test-secret".to_string(),
            jwt_expiry_hours: 24,
            otp_codes: OtpCodeSource::default(),
            store: Some(Arc::new(StaticStore)),
            clock: Arc::new(FixedClock::new(Utc::now())),
        },
    );
    create_router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

async fn sign_in(app: &Router, email: &str) -> (String, Value) {
    let (status, _) = send(
        app,
        json_request(Method::POST, "/api/auth/send-otp", None, json!({ "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        app,
        json_request(
            Method::POST,
            "/api/auth/verify-otp",
            None,
            json!({ "email": email, "otp": OTP }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["data"]["token"].as_str().unwrap().to_string();
    (token, body)
}

fn registration_body() -> Value {
    json!({
        "personal": {
            "full_name": "Jane Doe",
            "email": "jane@example.com",
            "phone_number": "050 123 4567"
        },
        "business": {
            "business_name": "Acme Trading LLC",
            "trade_license_number": "TL-2024-001"
        },
        "trade": {
            "filename": "license.pdf",
            "file_url": "https://files.example.com/license.pdf"
        }
    })
}

async fn register(app: &Router, token: &str) {
    let (status, body) = send(
        app,
        json_request(
            Method::POST,
            "/api/user/full-registration",
            Some(token),
            registration_body(),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_otp_sign_in_for_new_account() {
    let app = app();
    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/auth/send-otp",
            None,
            json!({ "email": "owner@example.com" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], "owner@example.com");

    let (token, body) = sign_in(&app, "owner@example.com").await;
    assert!(!token.is_empty());
    assert_eq!(body["data"]["account_status"], "new");
    assert_eq!(body["status_code"], 200);
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let app = app();
    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/auth/send-otp",
            None,
            json!({ "email": "not-an-email" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid email format");
}

#[tokio::test]
async fn test_otp_cannot_be_reused() {
    let app = app();
    sign_in(&app, "reuse@example.com").await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/auth/verify-otp",
            None,
            json!({ "email": "reuse@example.com", "otp": OTP }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired OTP");
}

#[tokio::test]
async fn test_protected_routes_require_bearer_token() {
    let app = app();

    let request = Request::builder()
        .uri("/api/user/status")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Authorization header is required");

    let request = Request::builder()
        .uri("/api/user/status")
        .header(header::AUTHORIZATION, "Token abc")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid authorization header format");

    let (status, body) = send(&app, get("/api/user/status", "garbage")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_full_registration_completes_account() {
    let app = app();
    let (token, _) = sign_in(&app, "jane@example.com").await;

    let (_, body) = send(&app, get("/api/user/status", &token)).await;
    assert_eq!(body["data"]["is_complete"], false);

    register(&app, &token).await;

    let (status, body) = send(&app, get("/api/user/status", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "old");
    assert_eq!(body["data"]["is_complete"], true);

    let (_, body) = send(&app, get("/api/user/data", &token)).await;
    assert_eq!(body["data"]["personal"]["full_name"], "Jane Doe");

    let (_, body) = sign_in(&app, "jane@example.com").await;
    assert_eq!(body["data"]["account_status"], "old");
}

#[tokio::test]
async fn test_full_registration_from_urlencoded_form() {
    let app = app();
    let (token, _) = sign_in(&app, "form@example.com").await;

    let form = "personal_full_name=Jane+Doe&personal_email=form%40example.com\
        &personal_phone_number=0501234567&business%5Bbusiness_name%5D=Acme\
        &business%5Btrade_license_number%5D=TL-1&trade_filename=license.pdf\
        &trade_file_url=https%3A%2F%2Ffiles.example.com%2Flicense.pdf";
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/user/full-registration")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["business"]["business_name"], "Acme");
    assert_eq!(body["data"]["status"], "old");
}

#[tokio::test]
async fn test_full_registration_with_uploaded_license() {
    let app = app();
    let (token, _) = sign_in(&app, "upload@example.com").await;

    let boundary = "X-SME-BOUNDARY";
    let mut body = String::new();
    for (name, value) in [
        ("personal[full_name]", "Jane Doe"),
        ("personal[email]", "upload@example.com"),
        ("personal[phone_number]", "0501234567"),
        ("business[business_name]", "Acme"),
        ("business[trade_license_number]", "TL-9"),
    ] {
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"trade[file]\"; filename=\"scan.pdf\"\r\n\
         Content-Type: application/pdf\r\n\r\n%PDF-1.4 test\r\n--{boundary}--\r\n"
    ));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/user/full-registration")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["trade"]["filename"], "scan.pdf");
    assert_eq!(body["data"]["trade"]["file_url"], "https://files.test/scan.pdf");
}

#[tokio::test]
async fn test_financing_requires_complete_registration() {
    let app = app();
    let (token, _) = sign_in(&app, "early@example.com").await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/financing/request",
            Some(&token),
            json!({ "amount": "50000", "purpose": "Stock", "repayment_period": "12" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_financing_rejects_negative_amount() {
    let app = app();
    let (token, _) = sign_in(&app, "jane@example.com").await;
    register(&app, &token).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/financing/request",
            Some(&token),
            json!({ "amount": -5, "purpose": "Stock", "repayment_period": 12 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid amount. Must be a positive number");
}

#[tokio::test]
async fn test_financing_lifecycle() {
    let app = app();
    let (token, _) = sign_in(&app, "jane@example.com").await;
    register(&app, &token).await;

    let (status, body) = send(&app, get("/api/financing/latest", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "No financing request found");
    assert!(body["data"].is_null());

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/financing/request",
            Some(&token),
            json!({ "amount": "50000", "purpose": "Inventory", "repayment_period": "12" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "pending");
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (_, body) = send(&app, get("/api/financing/requests", &token)).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(&app, get(&format!("/api/financing/request-detail?id={id}"), &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["purpose"], "Inventory");

    let (_, body) = send(&app, get("/api/financing/latest", &token)).await;
    assert_eq!(body["data"]["id"], id.as_str());
}

#[tokio::test]
async fn test_request_detail_ownership_and_lookup() {
    let app = app();
    let (owner, _) = sign_in(&app, "owner@example.com").await;
    register(&app, &owner).await;
    let (other, _) = sign_in(&app, "other@example.com").await;

    let (_, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/financing/request",
            Some(&owner),
            json!({ "amount": "1000.50", "purpose": "Equipment", "repayment_period": "6" }),
        ),
    )
    .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, get(&format!("/api/financing/request-detail?id={id}"), &other)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Unauthorized to access this request");

    let unknown = uuid::Uuid::new_v4();
    let (status, body) = send(&app, get(&format!("/api/financing/request-detail?id={unknown}"), &owner)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Financing request not found");

    let (status, body) = send(&app, get("/api/financing/request-detail", &owner)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Request ID is required");
}
