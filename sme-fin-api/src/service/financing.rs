use sme_fin_db::models::{FinancingRequestModel, FinancingStatus};
use sqlx::Database;
use std::sync::Arc;
use uuid::Uuid;

use crate::clock::Clock;
use crate::domain::FinancingRequestInput;
use crate::error::{storage_failure, ApiError, ApiResult};
use crate::service::{CompletionEvaluator, RepositorySet};

/// Append-only financing requests, gated on a complete registration.
pub struct FinancingLedger<DB: Database> {
    repos: RepositorySet<DB>,
    completion: Arc<CompletionEvaluator<DB>>,
    clock: Arc<dyn Clock>,
}

impl<DB: Database> FinancingLedger<DB> {
    pub fn new(
        repos: RepositorySet<DB>,
        completion: Arc<CompletionEvaluator<DB>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repos,
            completion,
            clock,
        }
    }

    /// Appends a pending request for a complete account.
    ///
    /// Completion is checked before the fields, so an incomplete account is
    /// refused whatever it submits.
    pub async fn submit(
        &self,
        account_id: Uuid,
        input: &FinancingRequestInput,
    ) -> ApiResult<FinancingRequestModel> {
        let status = self.completion.status(account_id).await?;
        if !status.is_complete {
            return Err(ApiError::Precondition(
                "Please complete your registration before requesting financing".to_string(),
            ));
        }

        let terms = input.terms()?;
        let now = self.clock.now();
        let request = FinancingRequestModel {
            id: Uuid::new_v4(),
            account_id,
            amount: terms.amount,
            purpose: terms.purpose,
            repayment_period: terms.repayment_period,
            status: FinancingStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        let saved = self
            .repos
            .financing_requests
            .create(request)
            .await
            .map_err(storage_failure("Failed to create financing request", account_id))?;
        tracing::info!(user_id = %account_id, request_id = %saved.id, amount = %saved.amount, "Financing request submitted");
        Ok(saved)
    }

    /// Newest first. Empty when the account has none.
    pub async fn list(&self, account_id: Uuid) -> ApiResult<Vec<FinancingRequestModel>> {
        self.repos
            .financing_requests
            .list_by_account_id(account_id)
            .await
            .map_err(storage_failure("Database error", account_id))
    }

    /// Looks the request up globally, then checks ownership.
    pub async fn get(&self, account_id: Uuid, request_id: Uuid) -> ApiResult<FinancingRequestModel> {
        let request = self
            .repos
            .financing_requests
            .find_by_id(request_id)
            .await
            .map_err(storage_failure("Database error", account_id))?
            .ok_or_else(|| ApiError::NotFound("Financing request not found".to_string()))?;

        if request.account_id != account_id {
            tracing::warn!(user_id = %account_id, request_id = %request_id, "Financing request owned by another account");
            return Err(ApiError::Forbidden("Unauthorized to access this request".to_string()));
        }
        Ok(request)
    }

    pub async fn latest(&self, account_id: Uuid) -> ApiResult<Option<FinancingRequestModel>> {
        self.repos
            .financing_requests
            .find_latest_by_account_id(account_id)
            .await
            .map_err(storage_failure("Database error", account_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::{BusinessDetailsInput, FullRegistrationInput, PersonalDetailsInput, TradeLicenseInput};
    use crate::service::test_support::repository_set;
    use crate::service::RegistrationService;
    use chrono::{Duration, Utc};
    use heapless::String as HeaplessString;
    use rust_decimal::Decimal;
    use sme_fin_db::memory::InMemoryRepositories;
    use sme_fin_db::models::AccountModel;
    use sme_fin_db::repository::FindOrCreateByEmail;
    use sqlx::Postgres;
    use std::str::FromStr;

    struct Fixture {
        repos: InMemoryRepositories,
        clock: FixedClock,
        registration: RegistrationService<Postgres>,
        ledger: FinancingLedger<Postgres>,
    }

    fn fixture() -> Fixture {
        let repos = InMemoryRepositories::new();
        let clock = FixedClock::new(Utc::now());
        let set = repository_set(&repos);
        let completion = Arc::new(CompletionEvaluator::new(set.clone()));
        let registration =
            RegistrationService::new(set.clone(), completion.clone(), None, Arc::new(clock.clone()));
        let ledger = FinancingLedger::new(set, completion, Arc::new(clock.clone()));
        Fixture {
            repos,
            clock,
            registration,
            ledger,
        }
    }

    async fn account(f: &Fixture, email: &str) -> Uuid {
        FindOrCreateByEmail::<Postgres, _>::find_or_create_by_email(
            f.repos.account_repository.as_ref(),
            AccountModel::new(HeaplessString::from_str(email).unwrap(), f.clock.now()),
        )
        .await
        .unwrap()
        .0
        .id
    }

    fn registration() -> FullRegistrationInput {
        FullRegistrationInput {
            personal: PersonalDetailsInput {
                full_name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone_number: "0501234567".to_string(),
            },
            business: BusinessDetailsInput {
                business_name: "Acme Trading LLC".to_string(),
                trade_license_number: "TL-2024-001".to_string(),
            },
            trade: TradeLicenseInput {
                filename: "license.pdf".to_string(),
                file_url: "https://files.example.com/license.pdf".to_string(),
            },
        }
    }

    async fn complete_account(f: &Fixture, email: &str) -> Uuid {
        let id = account(f, email).await;
        f.registration.full_registration(id, registration(), None).await.unwrap();
        id
    }

    fn request(amount: &str) -> FinancingRequestInput {
        FinancingRequestInput {
            amount: amount.to_string(),
            purpose: "Inventory".to_string(),
            repayment_period: "12".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_refused_until_registration_complete() {
        let f = fixture();
        let id = account(&f, "a@b.com").await;
        let input = registration();
        let refused = Err(ApiError::Precondition(
            "Please complete your registration before requesting financing".to_string(),
        ));

        assert_eq!(f.ledger.submit(id, &request("1000")).await, refused);

        f.registration.upsert_personal_details(id, &input.personal).await.unwrap();
        assert_eq!(f.ledger.submit(id, &request("1000")).await, refused);

        f.registration.upsert_business_details(id, &input.business).await.unwrap();
        assert_eq!(f.ledger.submit(id, &request("-5")).await, refused);

        f.registration.upsert_trade_license(id, &input.trade).await.unwrap();
        let saved = f.ledger.submit(id, &request("1000")).await.unwrap();
        assert_eq!(saved.status, FinancingStatus::Pending);
        assert_eq!(saved.amount, Decimal::from(1000));
    }

    #[tokio::test]
    async fn test_invalid_amount_persists_nothing() {
        let f = fixture();
        let id = complete_account(&f, "a@b.com").await;

        assert_eq!(
            f.ledger.submit(id, &request("-5")).await,
            Err(ApiError::Validation("Invalid amount. Must be a positive number".to_string()))
        );
        assert_eq!(f.repos.financing_request_repository.len().await, 0);
    }

    #[tokio::test]
    async fn test_list_and_latest_are_newest_first() {
        let f = fixture();
        let id = complete_account(&f, "a@b.com").await;

        assert!(f.ledger.list(id).await.unwrap().is_empty());
        assert_eq!(f.ledger.latest(id).await, Ok(None));

        let first = f.ledger.submit(id, &request("1000")).await.unwrap();
        f.clock.advance(Duration::seconds(1));
        let second = f.ledger.submit(id, &request("2000")).await.unwrap();

        let ids: Vec<Uuid> = f.ledger.list(id).await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
        assert_eq!(f.ledger.latest(id).await, Ok(Some(second)));
    }

    #[tokio::test]
    async fn test_get_checks_existence_before_ownership() {
        let f = fixture();
        let owner = complete_account(&f, "owner@example.com").await;
        let other = complete_account(&f, "other@example.com").await;
        let saved = f.ledger.submit(owner, &request("1000")).await.unwrap();

        assert_eq!(f.ledger.get(owner, saved.id).await, Ok(saved.clone()));
        assert_eq!(
            f.ledger.get(other, saved.id).await,
            Err(ApiError::Forbidden("Unauthorized to access this request".to_string()))
        );
        assert_eq!(
            f.ledger.get(owner, Uuid::new_v4()).await,
            Err(ApiError::NotFound("Financing request not found".to_string()))
        );
    }
}
