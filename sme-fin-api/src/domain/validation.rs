//! Shared input rules
//!
//! Format checks are declared with `validator` on the input types. The
//! presence check and the choice of which violation to report live here, so
//! every input reports its first violation in declared field order.

use heapless::String as HeaplessString;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::str::FromStr;
use validator::{ValidationError, ValidationErrors};

use crate::error::{ApiError, ApiResult};

pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").expect("email regex is valid")
});

pub static OTP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{6}$").expect("otp regex is valid"));

static PHONE_DIGITS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10,15}$").expect("phone regex is valid"));

/// Strips spaces, hyphens and parentheses from a phone number.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect()
}

/// Accepts 10 to 15 digits once formatting characters are removed.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_DIGITS_REGEX.is_match(&normalize_phone(phone)) {
        Ok(())
    } else {
        Err(ValidationError::new("phone").with_message(Cow::Borrowed("Invalid phone number format")))
    }
}

/// One field in reporting order.
pub(crate) struct FieldRule<'a> {
    pub name: &'static str,
    pub value: &'a str,
    pub required: &'static str,
}

impl<'a> FieldRule<'a> {
    pub fn new(name: &'static str, value: &'a str, required: &'static str) -> Self {
        Self {
            name,
            value,
            required,
        }
    }
}

/// Reports the first violation among `rules`, in order.
///
/// A blank field reports its `required` message. Otherwise the first
/// `validator` error recorded for the field is reported.
pub(crate) fn first_violation(
    outcome: Result<(), ValidationErrors>,
    rules: &[FieldRule<'_>],
) -> ApiResult<()> {
    let errors = outcome.err();
    let field_errors = errors.as_ref().map(ValidationErrors::field_errors);

    for rule in rules {
        if rule.value.trim().is_empty() {
            return Err(ApiError::Validation(rule.required.to_string()));
        }
        let failed = field_errors
            .as_ref()
            .and_then(|fields| fields.get(rule.name))
            .and_then(|errs| errs.first());
        if let Some(err) = failed {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {}", rule.name.replace('_', " ")));
            return Err(ApiError::Validation(message));
        }
    }
    Ok(())
}

/// Converts a validated value into its bounded storage form. `N` counts
/// UTF-8 bytes.
pub(crate) fn bounded<const N: usize>(value: &str, field: &str) -> ApiResult<HeaplessString<N>> {
    HeaplessString::from_str(value)
        .map_err(|_| ApiError::Validation(format!("{field} is too long")))
}
