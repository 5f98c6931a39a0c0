use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use sme_fin_api::ApiError;
use uuid::Uuid;

use crate::response::AppError;
use crate::state::AppState;

/// Caller identity recovered from the `Authorization: Bearer` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub user_id: Uuid,
    pub email: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| unauthorized("Authorization header is required"))?;

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.split_once(' '))
            .filter(|(scheme, token)| *scheme == "Bearer" && !token.is_empty())
            .map(|(_, token)| token)
            .ok_or_else(|| unauthorized("Invalid authorization header format"))?;

        let claims = state.sessions.verify(token)?;
        Ok(AuthSession {
            user_id: claims.user_id,
            email: claims.email,
        })
    }
}

fn unauthorized(message: &str) -> AppError {
    tracing::warn!("{message}");
    AppError(ApiError::Auth(message.to_string()))
}
