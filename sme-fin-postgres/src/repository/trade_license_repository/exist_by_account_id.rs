use async_trait::async_trait;
use sme_fin_db::models::TradeLicenseModel;
use sme_fin_db::repository::ExistByAccountId;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::TradeLicenseRepositoryImpl;

impl TradeLicenseRepositoryImpl {
    pub(super) async fn exist_by_account_id_impl(
        repo: &TradeLicenseRepositoryImpl,
        account_id: Uuid,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS(SELECT 1 FROM trade_licenses WHERE account_id = $1)"#,
        )
        .bind(account_id)
        .fetch_one(&*repo.pool)
        .await?;

        Ok(exists)
    }
}

#[async_trait]
impl ExistByAccountId<Postgres, TradeLicenseModel> for TradeLicenseRepositoryImpl {
    async fn exist_by_account_id(&self, account_id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Self::exist_by_account_id_impl(self, account_id).await
    }
}
