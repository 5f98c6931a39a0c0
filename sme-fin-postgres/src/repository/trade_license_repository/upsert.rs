use async_trait::async_trait;
use sme_fin_db::models::TradeLicenseModel;
use sme_fin_db::repository::UpsertByAccount;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::TradeLicenseRepositoryImpl;
use crate::utils::TryFromRow;

impl TradeLicenseRepositoryImpl {
    pub(super) async fn upsert_impl(
        repo: &TradeLicenseRepositoryImpl,
        item: TradeLicenseModel,
    ) -> Result<TradeLicenseModel, Box<dyn Error + Send + Sync>> {
        // On conflict the existing row keeps its id and created_at.
        let row = sqlx::query(
            r#"
            INSERT INTO trade_licenses (id, account_id, filename, file_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (account_id) DO UPDATE SET
                filename = EXCLUDED.filename,
                file_url = EXCLUDED.file_url,
                updated_at = EXCLUDED.updated_at
            RETURNING id, account_id, filename, file_url, created_at, updated_at
            "#,
        )
        .bind(item.id)
        .bind(item.account_id)
        .bind(item.filename.as_str())
        .bind(&item.file_url)
        .bind(item.created_at)
        .bind(item.updated_at)
        .fetch_one(&*repo.pool)
        .await?;

        TradeLicenseModel::try_from_row(&row)
    }
}

#[async_trait]
impl UpsertByAccount<Postgres, TradeLicenseModel> for TradeLicenseRepositoryImpl {
    async fn upsert(&self, item: TradeLicenseModel) -> Result<TradeLicenseModel, Box<dyn Error + Send + Sync>> {
        Self::upsert_impl(self, item).await
    }
}
