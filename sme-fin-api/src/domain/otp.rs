use validator::Validate;

use crate::domain::validation::{first_violation, FieldRule, EMAIL_REGEX, OTP_REGEX};
use crate::error::ApiResult;

/// Request for a new one-time passcode.
#[derive(Debug, Clone, Default, Validate)]
pub struct SendOtpInput {
    #[validate(
        length(max = 255, message = "Email must be at most 255 characters"),
        regex(path = *EMAIL_REGEX, message = "Invalid email format")
    )]
    pub email: String,
}

impl SendOtpInput {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }

    pub fn check(&self) -> ApiResult<()> {
        first_violation(
            self.validate(),
            &[FieldRule::new("email", &self.email, "Email is required")],
        )
    }
}

/// Redemption attempt for a previously issued passcode.
#[derive(Debug, Clone, Default, Validate)]
pub struct VerifyOtpInput {
    #[validate(
        length(max = 255, message = "Email must be at most 255 characters"),
        regex(path = *EMAIL_REGEX, message = "Invalid email format")
    )]
    pub email: String,

    #[validate(regex(path = *OTP_REGEX, message = "Invalid OTP format"))]
    pub otp: String,
}

impl VerifyOtpInput {
    pub fn new(email: impl Into<String>, otp: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            otp: otp.into(),
        }
    }

    pub fn check(&self) -> ApiResult<()> {
        first_violation(
            self.validate(),
            &[
                FieldRule::new("email", &self.email, "Email is required"),
                FieldRule::new("otp", &self.otp, "OTP is required"),
            ],
        )
    }
}
