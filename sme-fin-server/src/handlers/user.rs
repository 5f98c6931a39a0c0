use axum::extract::State;
use axum::http::StatusCode;
use sme_fin_api::{
    BusinessDetailsInput, FullRegistrationInput, PersonalDetailsInput, TradeLicenseInput,
};

use crate::extract::{AuthSession, FormPayload};
use crate::response::{success, HandlerResult};
use crate::state::AppState;

/// POST /api/user/full-registration
pub async fn full_registration(
    State(state): State<AppState>,
    session: AuthSession,
    mut form: FormPayload,
) -> HandlerResult {
    let upload = form.take_file(Some("trade"), "file");
    let input = FullRegistrationInput {
        personal: PersonalDetailsInput {
            full_name: form.value(Some("personal"), "full_name"),
            email: form.value(Some("personal"), "email"),
            phone_number: form.value(Some("personal"), "phone_number"),
        },
        business: BusinessDetailsInput {
            business_name: form.value(Some("business"), "business_name"),
            trade_license_number: form.value(Some("business"), "trade_license_number"),
        },
        trade: TradeLicenseInput {
            filename: form.value(Some("trade"), "filename"),
            file_url: form.value(Some("trade"), "file_url"),
        },
    };

    let outcome = state
        .registration
        .full_registration(session.user_id, input, upload)
        .await?;
    Ok(success(StatusCode::OK, "Full registration saved successfully", outcome))
}

/// GET /api/user/status
pub async fn status(State(state): State<AppState>, session: AuthSession) -> HandlerResult {
    let status = state.completion.status(session.user_id).await?;
    Ok(success(StatusCode::OK, "Account status retrieved successfully", status))
}

/// GET /api/user/data
pub async fn data(State(state): State<AppState>, session: AuthSession) -> HandlerResult {
    let snapshot = state.completion.snapshot(session.user_id).await?;
    Ok(success(StatusCode::OK, "User data retrieved successfully", snapshot))
}
