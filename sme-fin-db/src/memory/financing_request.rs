use async_trait::async_trait;
use sqlx::Database;
use std::error::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::FinancingRequestModel;
use crate::repository::{Create, FindById, FindLatestByAccountId, ListByAccountId};

#[derive(Default)]
pub struct InMemoryFinancingRequestRepository {
    requests: RwLock<Vec<FinancingRequestModel>>,
}

impl InMemoryFinancingRequestRepository {
    pub async fn len(&self) -> usize {
        self.requests.read().await.len()
    }
}

#[async_trait]
impl<DB: Database> Create<DB, FinancingRequestModel> for InMemoryFinancingRequestRepository {
    async fn create(&self, item: FinancingRequestModel) -> Result<FinancingRequestModel, Box<dyn Error + Send + Sync>> {
        self.requests.write().await.push(item.clone());
        Ok(item)
    }
}

#[async_trait]
impl<DB: Database> FindById<DB, FinancingRequestModel> for InMemoryFinancingRequestRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<FinancingRequestModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.requests.read().await.iter().find(|r| r.id == id).cloned())
    }
}

#[async_trait]
impl<DB: Database> ListByAccountId<DB, FinancingRequestModel> for InMemoryFinancingRequestRepository {
    async fn list_by_account_id(
        &self,
        account_id: Uuid,
    ) -> Result<Vec<FinancingRequestModel>, Box<dyn Error + Send + Sync>> {
        let requests = self.requests.read().await;
        // Reverse insertion order first so the stable sort breaks ties newest-first.
        let mut owned: Vec<FinancingRequestModel> = requests
            .iter()
            .rev()
            .filter(|r| r.account_id == account_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }
}

#[async_trait]
impl<DB: Database> FindLatestByAccountId<DB, FinancingRequestModel> for InMemoryFinancingRequestRepository {
    async fn find_latest_by_account_id(
        &self,
        account_id: Uuid,
    ) -> Result<Option<FinancingRequestModel>, Box<dyn Error + Send + Sync>> {
        let listed = ListByAccountId::<DB, FinancingRequestModel>::list_by_account_id(self, account_id).await?;
        Ok(listed.into_iter().next())
    }
}
