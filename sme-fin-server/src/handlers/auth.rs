use axum::extract::State;
use axum::http::StatusCode;
use sme_fin_api::{SendOtpInput, VerifyOtpInput};

use crate::extract::FormPayload;
use crate::response::{success, HandlerResult};
use crate::state::AppState;

/// POST /api/auth/send-otp
pub async fn send_otp(State(state): State<AppState>, form: FormPayload) -> HandlerResult {
    let input = SendOtpInput::new(form.value(None, "email"));
    let issued = state.otp.issue_challenge(input).await?;
    Ok(success(StatusCode::OK, "OTP sent successfully", issued))
}

/// POST /api/auth/verify-otp
pub async fn verify_otp(State(state): State<AppState>, form: FormPayload) -> HandlerResult {
    let input = VerifyOtpInput::new(form.value(None, "email"), form.value(None, "otp"));
    let grant = state.otp.verify(input).await?;
    Ok(success(StatusCode::OK, "OTP verified successfully", grant))
}
