use async_trait::async_trait;
use sme_fin_db::models::OtpChallengeModel;
use sme_fin_db::repository::FindLatestUnverified;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::OtpChallengeRepositoryImpl;
use crate::utils::TryFromRow;

impl OtpChallengeRepositoryImpl {
    pub(super) async fn find_latest_unverified_impl(
        repo: &OtpChallengeRepositoryImpl,
        email: &str,
        code: &str,
    ) -> Result<Option<OtpChallengeModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, code, expires_at, created_at, verified
            FROM otp_challenges
            WHERE email = $1 AND code = $2 AND verified = FALSE
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(email)
        .bind(code)
        .fetch_optional(&*repo.pool)
        .await?;

        row.as_ref().map(OtpChallengeModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindLatestUnverified<Postgres, OtpChallengeModel> for OtpChallengeRepositoryImpl {
    async fn find_latest_unverified(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<OtpChallengeModel>, Box<dyn Error + Send + Sync>> {
        Self::find_latest_unverified_impl(self, email, code).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::test_utils::{create_test_account, create_test_challenge};
    use crate::test_helper::setup_test_context;
    use chrono::Duration;
    use sme_fin_db::repository::{Create, FindLatestUnverified};

    #[tokio::test]
    #[ignore]
    async fn test_find_latest_unverified_prefers_newest() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let otp_repo = &ctx.repos().otp_challenge_repository;

        let email = create_test_account().email;
        let mut older = create_test_challenge(email.as_str(), "123456");
        older.created_at -= Duration::minutes(1);
        otp_repo.create(older).await?;
        let newer = otp_repo.create(create_test_challenge(email.as_str(), "123456")).await?;

        let found = otp_repo.find_latest_unverified(email.as_str(), "123456").await?;
        assert_eq!(found.map(|c| c.id), Some(newer.id));

        let wrong_code = otp_repo.find_latest_unverified(email.as_str(), "654321").await?;
        assert!(wrong_code.is_none());

        Ok(())
    }
}
