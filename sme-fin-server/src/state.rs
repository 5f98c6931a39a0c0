//! Application state

use sme_fin_api::{
    Clock, CompletionEvaluator, DocumentStore, FinancingLedger, OtpCodeSource, OtpVerifier,
    RegistrationService, RepositorySet, SessionIssuer,
};
use sme_fin_postgres::Repositories;
use sqlx::Postgres;
use std::sync::Arc;

/// Settings the services are built from.
pub struct StateOptions {
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub otp_codes: OtpCodeSource,
    pub store: Option<Arc<dyn DocumentStore>>,
    pub clock: Arc<dyn Clock>,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionIssuer>,
    pub otp: Arc<OtpVerifier<Postgres>>,
    pub completion: Arc<CompletionEvaluator<Postgres>>,
    pub registration: Arc<RegistrationService<Postgres>>,
    pub financing: Arc<FinancingLedger<Postgres>>,
}

impl AppState {
    pub fn new(repos: RepositorySet<Postgres>, options: StateOptions) -> Self {
        let sessions = Arc::new(SessionIssuer::new(
            options.jwt_secret.as_bytes(),
            options.jwt_expiry_hours,
            options.clock.clone(),
        ));
        let completion = Arc::new(CompletionEvaluator::new(repos.clone()));
        let otp = Arc::new(OtpVerifier::new(
            repos.clone(),
            completion.clone(),
            sessions.clone(),
            options.otp_codes,
            options.clock.clone(),
        ));
        let registration = Arc::new(RegistrationService::new(
            repos.clone(),
            completion.clone(),
            options.store,
            options.clock.clone(),
        ));
        let financing = Arc::new(FinancingLedger::new(repos, completion.clone(), options.clock));

        Self {
            sessions,
            otp,
            completion,
            registration,
            financing,
        }
    }
}

/// Views the Postgres repositories as the trait objects the services hold.
pub fn postgres_repository_set(repos: &Repositories) -> RepositorySet<Postgres> {
    RepositorySet {
        accounts: repos.account_repository.clone(),
        otp_challenges: repos.otp_challenge_repository.clone(),
        personal_details: repos.personal_details_repository.clone(),
        business_details: repos.business_details_repository.clone(),
        trade_licenses: repos.trade_license_repository.clone(),
        financing_requests: repos.financing_request_repository.clone(),
    }
}
