use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// Largest amount a NUMERIC(15, 2) column holds.
const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_319, 232_830, 0, false, 2);

/// Raw financing request fields as submitted.
#[derive(Debug, Clone, Default)]
pub struct FinancingRequestInput {
    pub amount: String,
    pub purpose: String,
    pub repayment_period: String,
}

/// Financing request fields after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancingTerms {
    pub amount: Decimal,
    pub purpose: String,
    pub repayment_period: i32,
}

impl FinancingRequestInput {
    /// Validates amount, purpose and repayment period, in that order.
    pub fn terms(&self) -> ApiResult<FinancingTerms> {
        let amount = self.amount.trim();
        if amount.is_empty() {
            return Err(ApiError::Validation("Amount is required".to_string()));
        }
        let amount = parse_amount(amount)
            .filter(|a| *a > Decimal::ZERO)
            .ok_or_else(|| ApiError::Validation("Invalid amount. Must be a positive number".to_string()))?;
        if amount > MAX_AMOUNT {
            return Err(ApiError::Validation("Amount exceeds the maximum allowed".to_string()));
        }

        if self.purpose.trim().is_empty() {
            return Err(ApiError::Validation("Purpose is required".to_string()));
        }

        let period = self.repayment_period.trim();
        if period.is_empty() {
            return Err(ApiError::Validation("Repayment period is required".to_string()));
        }
        let repayment_period = period
            .parse::<i32>()
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| {
                ApiError::Validation(
                    "Invalid repayment period. Must be a positive number of months".to_string(),
                )
            })?;

        Ok(FinancingTerms {
            amount,
            purpose: self.purpose.clone(),
            repayment_period,
        })
    }
}

/// Parses plain or scientific notation and rounds to cents.
fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
        .map(|a| a.round_dp(2))
}

/// Resolves the `id` query parameter of a request-detail lookup.
pub fn parse_request_id(raw: Option<&str>) -> ApiResult<Uuid> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(ApiError::Validation("Request ID is required".to_string()));
    }
    Uuid::parse_str(raw).map_err(|_| ApiError::Validation("Invalid request ID".to_string()))
}
