use async_trait::async_trait;
use sme_fin_db::models::OtpChallengeModel;
use sme_fin_db::repository::Create;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::OtpChallengeRepositoryImpl;
use crate::utils::TryFromRow;

impl OtpChallengeRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &OtpChallengeRepositoryImpl,
        item: OtpChallengeModel,
    ) -> Result<OtpChallengeModel, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            INSERT INTO otp_challenges (id, email, code, expires_at, created_at, verified)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, email, code, expires_at, created_at, verified
            "#,
        )
        .bind(item.id)
        .bind(item.email.as_str())
        .bind(item.code.as_str())
        .bind(item.expires_at)
        .bind(item.created_at)
        .bind(item.verified)
        .fetch_one(&*repo.pool)
        .await?;

        OtpChallengeModel::try_from_row(&row)
    }
}

#[async_trait]
impl Create<Postgres, OtpChallengeModel> for OtpChallengeRepositoryImpl {
    async fn create(&self, item: OtpChallengeModel) -> Result<OtpChallengeModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::test_utils::{create_test_account, create_test_challenge};
    use crate::test_helper::setup_test_context;
    use sme_fin_db::repository::Create;

    #[tokio::test]
    #[ignore]
    async fn test_create_challenge() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let otp_repo = &ctx.repos().otp_challenge_repository;

        let email = create_test_account().email;
        let challenge = create_test_challenge(email.as_str(), "123456");
        let saved = otp_repo.create(challenge.clone()).await?;

        assert_eq!(saved.id, challenge.id);
        assert_eq!(saved.code.as_str(), "123456");
        assert!(!saved.verified);

        Ok(())
    }
}
