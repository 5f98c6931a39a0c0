use async_trait::async_trait;
use sme_fin_db::models::AccountModel;
use sme_fin_db::repository::FindOrCreateByEmail;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::AccountRepositoryImpl;
use crate::utils::TryFromRow;

impl AccountRepositoryImpl {
    pub(super) async fn find_or_create_by_email_impl(
        repo: &AccountRepositoryImpl,
        candidate: AccountModel,
    ) -> Result<(AccountModel, bool), Box<dyn Error + Send + Sync>> {
        // ON CONFLICT DO NOTHING returns no row when the email is already taken,
        // including when a concurrent request inserted it first.
        let inserted = sqlx::query(
            r#"
            INSERT INTO accounts (id, email, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email, created_at, updated_at
            "#,
        )
        .bind(candidate.id)
        .bind(candidate.email.as_str())
        .bind(candidate.created_at)
        .bind(candidate.updated_at)
        .fetch_optional(&*repo.pool)
        .await?;

        if let Some(row) = inserted {
            return Ok((AccountModel::try_from_row(&row)?, true));
        }

        let existing = Self::find_by_email_impl(repo, candidate.email.as_str())
            .await?
            .ok_or("account vanished between insert and select")?;
        Ok((existing, false))
    }
}

#[async_trait]
impl FindOrCreateByEmail<Postgres, AccountModel> for AccountRepositoryImpl {
    async fn find_or_create_by_email(
        &self,
        candidate: AccountModel,
    ) -> Result<(AccountModel, bool), Box<dyn Error + Send + Sync>> {
        Self::find_or_create_by_email_impl(self, candidate).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::test_utils::create_test_account;
    use crate::test_helper::setup_test_context;
    use chrono::Utc;
    use sme_fin_db::models::AccountModel;
    use sme_fin_db::repository::FindOrCreateByEmail;

    #[tokio::test]
    #[ignore]
    async fn test_find_or_create_returns_existing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let account_repo = &ctx.repos().account_repository;

        let candidate = create_test_account();
        let email = candidate.email.clone();

        let (created, was_created) = account_repo.find_or_create_by_email(candidate).await?;
        assert!(was_created);

        let (again, was_created) = account_repo
            .find_or_create_by_email(AccountModel::new(email, Utc::now()))
            .await?;
        assert!(!was_created);
        assert_eq!(again.id, created.id);

        Ok(())
    }
}
