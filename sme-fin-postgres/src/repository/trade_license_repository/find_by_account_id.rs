use async_trait::async_trait;
use sme_fin_db::models::TradeLicenseModel;
use sme_fin_db::repository::FindByAccountId;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::TradeLicenseRepositoryImpl;
use crate::utils::TryFromRow;

impl TradeLicenseRepositoryImpl {
    pub(super) async fn find_by_account_id_impl(
        repo: &TradeLicenseRepositoryImpl,
        account_id: Uuid,
    ) -> Result<Option<TradeLicenseModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            SELECT id, account_id, filename, file_url, created_at, updated_at
            FROM trade_licenses
            WHERE account_id = $1
            "#,
        )
        .bind(account_id)
        .fetch_optional(&*repo.pool)
        .await?;

        row.as_ref().map(TradeLicenseModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindByAccountId<Postgres, TradeLicenseModel> for TradeLicenseRepositoryImpl {
    async fn find_by_account_id(
        &self,
        account_id: Uuid,
    ) -> Result<Option<TradeLicenseModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_account_id_impl(self, account_id).await
    }
}
