use async_trait::async_trait;
use sme_fin_db::models::AccountModel;
use sme_fin_db::repository::FindByEmail;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::AccountRepositoryImpl;
use crate::utils::TryFromRow;

impl AccountRepositoryImpl {
    pub(super) async fn find_by_email_impl(
        repo: &AccountRepositoryImpl,
        email: &str,
    ) -> Result<Option<AccountModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, created_at, updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&*repo.pool)
        .await?;

        row.as_ref().map(AccountModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindByEmail<Postgres, AccountModel> for AccountRepositoryImpl {
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_email_impl(self, email).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::test_utils::create_test_account;
    use crate::test_helper::setup_test_context;
    use sme_fin_db::repository::{FindByEmail, FindOrCreateByEmail};

    #[tokio::test]
    #[ignore]
    async fn test_find_by_email() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let account_repo = &ctx.repos().account_repository;

        let (account, _) = account_repo.find_or_create_by_email(create_test_account()).await?;

        let found = account_repo.find_by_email(account.email.as_str()).await?;
        assert_eq!(found.map(|a| a.id), Some(account.id));

        let missing = account_repo.find_by_email("nobody@example.invalid").await?;
        assert!(missing.is_none());

        Ok(())
    }
}
