use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use sme_fin_api::{parse_request_id, FinancingRequestInput};

use crate::extract::{AuthSession, FormPayload};
use crate::response::{success, HandlerResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub id: Option<String>,
}

/// POST /api/financing/request
pub async fn request_financing(
    State(state): State<AppState>,
    session: AuthSession,
    form: FormPayload,
) -> HandlerResult {
    let input = FinancingRequestInput {
        amount: form.value(None, "amount"),
        purpose: form.value(None, "purpose"),
        repayment_period: form.value(None, "repayment_period"),
    };
    let request = state.financing.submit(session.user_id, &input).await?;
    Ok(success(StatusCode::CREATED, "Financing request submitted successfully", request))
}

/// GET /api/financing/requests
pub async fn list_requests(State(state): State<AppState>, session: AuthSession) -> HandlerResult {
    let requests = state.financing.list(session.user_id).await?;
    Ok(success(StatusCode::OK, "Financing requests retrieved successfully", requests))
}

/// GET /api/financing/request-detail?id=
pub async fn request_detail(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<DetailQuery>,
) -> HandlerResult {
    let request_id = parse_request_id(query.id.as_deref())?;
    let request = state.financing.get(session.user_id, request_id).await?;
    Ok(success(StatusCode::OK, "Financing request retrieved successfully", request))
}

/// GET /api/financing/latest
pub async fn latest_request(State(state): State<AppState>, session: AuthSession) -> HandlerResult {
    let latest = state.financing.latest(session.user_id).await?;
    let message = if latest.is_some() {
        "Latest financing request retrieved successfully"
    } else {
        "No financing request found"
    };
    Ok(success(StatusCode::OK, message, latest))
}
