use heapless::String as HeaplessString;
use rand::Rng;
use sme_fin_db::models::{AccountModel, OtpChallengeModel, OTP_CODE_LENGTH};
use sqlx::Database;
use std::str::FromStr;
use std::sync::Arc;

use crate::clock::Clock;
use crate::domain::validation::{bounded, OTP_REGEX};
use crate::domain::{OtpIssued, SendOtpInput, SessionGrant, VerifyOtpInput};
use crate::error::{storage_failure, ApiError, ApiResult};
use crate::service::{CompletionEvaluator, RepositorySet};
use crate::session::SessionIssuer;

/// Where issued passcodes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpCodeSource {
    /// Every challenge gets the same code. Used for development and testing.
    Fixed(HeaplessString<OTP_CODE_LENGTH>),
    Random,
}

impl OtpCodeSource {
    pub fn fixed(code: &str) -> ApiResult<Self> {
        if !OTP_REGEX.is_match(code) {
            return Err(ApiError::Validation("Invalid OTP format".to_string()));
        }
        HeaplessString::from_str(code)
            .map(OtpCodeSource::Fixed)
            .map_err(|_| ApiError::Validation("Invalid OTP format".to_string()))
    }

    fn next_code(&self) -> HeaplessString<OTP_CODE_LENGTH> {
        match self {
            OtpCodeSource::Fixed(code) => code.clone(),
            OtpCodeSource::Random => {
                let mut rng = rand::thread_rng();
                (0..OTP_CODE_LENGTH)
                    .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
                    .collect()
            }
        }
    }

    fn delivery_message(&self) -> String {
        match self {
            OtpCodeSource::Fixed(code) => {
                format!("OTP sent to email (use default OTP: {code} for testing)")
            }
            OtpCodeSource::Random => "OTP sent to email".to_string(),
        }
    }
}

impl Default for OtpCodeSource {
    fn default() -> Self {
        OtpCodeSource::Fixed(HeaplessString::from_str("123456").unwrap_or_default())
    }
}

/// Issues and redeems one-time passcodes, and opens sessions on success.
pub struct OtpVerifier<DB: Database> {
    repos: RepositorySet<DB>,
    completion: Arc<CompletionEvaluator<DB>>,
    sessions: Arc<SessionIssuer>,
    codes: OtpCodeSource,
    clock: Arc<dyn Clock>,
}

impl<DB: Database> OtpVerifier<DB> {
    pub fn new(
        repos: RepositorySet<DB>,
        completion: Arc<CompletionEvaluator<DB>>,
        sessions: Arc<SessionIssuer>,
        codes: OtpCodeSource,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repos,
            completion,
            sessions,
            codes,
            clock,
        }
    }

    /// Creates the account on first contact and issues a fresh challenge.
    ///
    /// Earlier unverified challenges for the same email stay redeemable.
    pub async fn issue_challenge(&self, input: SendOtpInput) -> ApiResult<OtpIssued> {
        input.check()?;
        let email = bounded::<255>(&input.email, "Email")?;
        let now = self.clock.now();

        let (account, created) = self
            .repos
            .accounts
            .find_or_create_by_email(AccountModel::new(email.clone(), now))
            .await
            .map_err(storage_failure("Failed to create user", &input.email))?;
        if created {
            tracing::info!(user_id = %account.id, email = %account.email, "Account created");
        }

        let challenge = OtpChallengeModel::issue(email, self.codes.next_code(), now);
        self.repos
            .otp_challenges
            .create(challenge)
            .await
            .map_err(storage_failure("Failed to create OTP verification", &input.email))?;
        tracing::info!(user_id = %account.id, "OTP issued");

        Ok(OtpIssued {
            email: input.email,
            message: self.codes.delivery_message(),
        })
    }

    /// Consumes the newest unverified challenge matching the email and code.
    ///
    /// An expired match is rejected and left unverified.
    pub async fn redeem(&self, input: &VerifyOtpInput) -> ApiResult<AccountModel> {
        input.check()?;
        let rejected = || ApiError::Auth("Invalid or expired OTP".to_string());

        let challenge = self
            .repos
            .otp_challenges
            .find_latest_unverified(&input.email, &input.otp)
            .await
            .map_err(storage_failure("Database error", &input.email))?
            .ok_or_else(|| {
                tracing::warn!(email = %input.email, "No redeemable OTP challenge");
                rejected()
            })?;

        if challenge.is_expired_at(self.clock.now()) {
            tracing::warn!(email = %input.email, challenge_id = %challenge.id, "Expired OTP challenge");
            return Err(rejected());
        }

        let won = self
            .repos
            .otp_challenges
            .mark_verified(challenge.id)
            .await
            .map_err(storage_failure("Database error", &input.email))?;
        if !won {
            tracing::warn!(email = %input.email, challenge_id = %challenge.id, "OTP challenge already redeemed");
            return Err(rejected());
        }

        self.repos
            .accounts
            .find_by_email(&input.email)
            .await
            .map_err(storage_failure("Database error", &input.email))?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }

    /// Redeems the passcode and grants a session token.
    pub async fn verify(&self, input: VerifyOtpInput) -> ApiResult<SessionGrant> {
        let account = self.redeem(&input).await?;
        let token = self.sessions.issue(account.id, account.email.as_str())?;
        let status = self.completion.status(account.id).await?;
        tracing::info!(user_id = %account.id, "OTP verified");

        Ok(SessionGrant {
            token,
            user_id: account.id,
            email: account.email.to_string(),
            account_status: status.status,
        })
    }
}
