use sme_fin_db::models::{AccountModel, AccountStatus};
use sqlx::Database;
use uuid::Uuid;

use crate::domain::UserSnapshot;
use crate::error::{storage_failure, ApiError, ApiResult};
use crate::service::RepositorySet;

/// Derives account completion from the registration records.
///
/// Nothing is cached or stored: every call reads the current presence of the
/// three records.
pub struct CompletionEvaluator<DB: Database> {
    repos: RepositorySet<DB>,
}

impl<DB: Database> CompletionEvaluator<DB> {
    pub fn new(repos: RepositorySet<DB>) -> Self {
        Self { repos }
    }

    async fn account(&self, account_id: Uuid, missing: &str) -> ApiResult<AccountModel> {
        self.repos
            .accounts
            .find_by_id(account_id)
            .await
            .map_err(storage_failure("Database error", account_id))?
            .ok_or_else(|| ApiError::NotFound(missing.to_string()))
    }

    pub async fn status(&self, account_id: Uuid) -> ApiResult<AccountStatus> {
        let account = self.account(account_id, "Account not found").await?;

        let has_personal = self
            .repos
            .personal_details
            .exist_by_account_id(account_id)
            .await
            .map_err(storage_failure("Database error", account_id))?;
        let has_business = self
            .repos
            .business_details
            .exist_by_account_id(account_id)
            .await
            .map_err(storage_failure("Database error", account_id))?;
        let has_trade_license = self
            .repos
            .trade_licenses
            .exist_by_account_id(account_id)
            .await
            .map_err(storage_failure("Database error", account_id))?;

        Ok(AccountStatus::derive(
            account.id,
            account.email.as_str(),
            has_personal,
            has_business,
            has_trade_license,
        ))
    }

    /// Loads every registration record of the account.
    pub async fn snapshot(&self, account_id: Uuid) -> ApiResult<UserSnapshot> {
        let account = self.account(account_id, "User not found").await?;

        let personal = self
            .repos
            .personal_details
            .find_by_account_id(account_id)
            .await
            .map_err(storage_failure("Database error", account_id))?;
        let business = self
            .repos
            .business_details
            .find_by_account_id(account_id)
            .await
            .map_err(storage_failure("Database error", account_id))?;
        let trade_license = self
            .repos
            .trade_licenses
            .find_by_account_id(account_id)
            .await
            .map_err(storage_failure("Database error", account_id))?;

        let status = AccountStatus::derive(
            account.id,
            account.email.as_str(),
            personal.is_some(),
            business.is_some(),
            trade_license.is_some(),
        );

        Ok(UserSnapshot {
            user_id: account.id,
            email: account.email.to_string(),
            status: status.status,
            personal,
            business,
            trade_license,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::repository_set;
    use chrono::Utc;
    use heapless::String as HeaplessString;
    use sme_fin_db::memory::InMemoryRepositories;
    use sme_fin_db::models::{BusinessDetailsModel, PersonalDetailsModel, STATUS_NEW};
    use sme_fin_db::repository::{FindOrCreateByEmail, UpsertByAccount};
    use sqlx::Postgres;
    use std::str::FromStr;

    async fn account(repos: &InMemoryRepositories) -> AccountModel {
        let candidate = AccountModel::new(HeaplessString::from_str("a@b.com").unwrap(), Utc::now());
        FindOrCreateByEmail::<Postgres, _>::find_or_create_by_email(
            repos.account_repository.as_ref(),
            candidate,
        )
        .await
        .unwrap()
        .0
    }

    #[tokio::test]
    async fn test_status_tracks_record_presence() {
        let repos = InMemoryRepositories::new();
        let evaluator = CompletionEvaluator::new(repository_set(&repos));
        let account = account(&repos).await;

        let status = evaluator.status(account.id).await.unwrap();
        assert_eq!(status.status, STATUS_NEW);
        assert!(!status.is_complete);

        let now = Utc::now();
        UpsertByAccount::<Postgres, _>::upsert(
            repos.personal_details_repository.as_ref(),
            PersonalDetailsModel {
                id: Uuid::new_v4(),
                account_id: account.id,
                full_name: HeaplessString::from_str("Jane Doe").unwrap(),
                email: HeaplessString::from_str("jane@example.com").unwrap(),
                phone_number: HeaplessString::from_str("0501234567").unwrap(),
                created_at: now,
                updated_at: now,
            },
        )
        .await
        .unwrap();
        UpsertByAccount::<Postgres, _>::upsert(
            repos.business_details_repository.as_ref(),
            BusinessDetailsModel {
                id: Uuid::new_v4(),
                account_id: account.id,
                business_name: HeaplessString::from_str("Acme").unwrap(),
                trade_license_number: HeaplessString::from_str("TL-1").unwrap(),
                created_at: now,
                updated_at: now,
            },
        )
        .await
        .unwrap();

        let status = evaluator.status(account.id).await.unwrap();
        assert!(status.has_personal_details && status.has_business_details);
        assert!(!status.has_trade_license);
        assert_eq!(status.status, STATUS_NEW);

        let snapshot = evaluator.snapshot(account.id).await.unwrap();
        assert_eq!(snapshot.status, STATUS_NEW);
        assert!(snapshot.personal.is_some());
        assert!(snapshot.trade_license.is_none());
        assert!(snapshot.summary().is_none());
    }

    #[tokio::test]
    async fn test_unknown_account_is_not_found() {
        let evaluator = CompletionEvaluator::new(repository_set(&InMemoryRepositories::new()));

        assert_eq!(
            evaluator.status(Uuid::new_v4()).await,
            Err(ApiError::NotFound("Account not found".to_string()))
        );
        assert_eq!(
            evaluator.snapshot(Uuid::new_v4()).await,
            Err(ApiError::NotFound("User not found".to_string()))
        );
    }
}
