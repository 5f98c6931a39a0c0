use async_trait::async_trait;
use sqlx::Database;
use std::error::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::OtpChallengeModel;
use crate::repository::{Create, FindLatestUnverified, MarkVerified};

#[derive(Default)]
pub struct InMemoryOtpChallengeRepository {
    challenges: RwLock<Vec<OtpChallengeModel>>,
}

impl InMemoryOtpChallengeRepository {
    /// All challenges issued for `email`, in issuance order
    pub async fn challenges_for(&self, email: &str) -> Vec<OtpChallengeModel> {
        let challenges = self.challenges.read().await;
        challenges.iter().filter(|c| c.email.as_str() == email).cloned().collect()
    }
}

#[async_trait]
impl<DB: Database> Create<DB, OtpChallengeModel> for InMemoryOtpChallengeRepository {
    async fn create(&self, item: OtpChallengeModel) -> Result<OtpChallengeModel, Box<dyn Error + Send + Sync>> {
        self.challenges.write().await.push(item.clone());
        Ok(item)
    }
}

#[async_trait]
impl<DB: Database> FindLatestUnverified<DB, OtpChallengeModel> for InMemoryOtpChallengeRepository {
    async fn find_latest_unverified(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<OtpChallengeModel>, Box<dyn Error + Send + Sync>> {
        let challenges = self.challenges.read().await;
        // max_by_key keeps the last of equal keys, so later pushes win ties.
        let latest = challenges
            .iter()
            .filter(|c| !c.verified && c.email.as_str() == email && c.code.as_str() == code)
            .max_by_key(|c| c.created_at)
            .cloned();
        Ok(latest)
    }
}

#[async_trait]
impl<DB: Database> MarkVerified<DB, OtpChallengeModel> for InMemoryOtpChallengeRepository {
    async fn mark_verified(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut challenges = self.challenges.write().await;
        match challenges.iter_mut().find(|c| c.id == id && !c.verified) {
            Some(challenge) => {
                challenge.verified = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
