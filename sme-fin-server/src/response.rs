//! JSON envelope wrapping every response

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use sme_fin_api::ApiError;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Success envelope carrying `data`.
pub fn success<T: Serialize>(status: StatusCode, message: &str, data: T) -> Response {
    let body = Envelope {
        success: true,
        message: message.to_string(),
        status_code: status.as_u16(),
        data: Some(data),
    };
    (status, Json(body)).into_response()
}

pub fn failure(status: StatusCode, message: &str) -> Response {
    let body = Envelope::<()> {
        success: false,
        message: message.to_string(),
        status_code: status.as_u16(),
        data: None,
    };
    (status, Json(body)).into_response()
}

/// `ApiError` rendered as an error envelope.
#[derive(Debug)]
pub struct AppError(pub ApiError);

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        failure(status, self.0.message())
    }
}

pub type HandlerResult = Result<Response, AppError>;
