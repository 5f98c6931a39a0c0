use async_trait::async_trait;
use sme_fin_db::models::FinancingRequestModel;
use sme_fin_db::repository::Create;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::FinancingRequestRepositoryImpl;
use crate::utils::TryFromRow;

impl FinancingRequestRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &FinancingRequestRepositoryImpl,
        item: FinancingRequestModel,
    ) -> Result<FinancingRequestModel, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            INSERT INTO financing_requests (id, account_id, amount, purpose, repayment_period, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, account_id, amount, purpose, repayment_period, status, created_at, updated_at
            "#,
        )
        .bind(item.id)
        .bind(item.account_id)
        .bind(item.amount)
        .bind(&item.purpose)
        .bind(item.repayment_period)
        .bind(item.status)
        .bind(item.created_at)
        .bind(item.updated_at)
        .fetch_one(&*repo.pool)
        .await?;

        FinancingRequestModel::try_from_row(&row)
    }
}

#[async_trait]
impl Create<Postgres, FinancingRequestModel> for FinancingRequestRepositoryImpl {
    async fn create(&self, item: FinancingRequestModel) -> Result<FinancingRequestModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::test_utils::{create_test_account, create_test_financing_request};
    use crate::test_helper::setup_test_context;
    use rust_decimal::Decimal;
    use sme_fin_db::models::FinancingStatus;
    use sme_fin_db::repository::{Create, FindOrCreateByEmail};
    use std::str::FromStr;

    #[tokio::test]
    #[ignore]
    async fn test_create_keeps_amount_and_status() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let (account, _) = ctx
            .repos()
            .account_repository
            .find_or_create_by_email(create_test_account())
            .await?;
        let repo = &ctx.repos().financing_request_repository;

        let saved = repo
            .create(create_test_financing_request(account.id, "150000.50"))
            .await?;

        assert_eq!(saved.amount, Decimal::from_str("150000.50").unwrap());
        assert_eq!(saved.status, FinancingStatus::Pending);
        assert_eq!(saved.account_id, account.id);

        Ok(())
    }
}
