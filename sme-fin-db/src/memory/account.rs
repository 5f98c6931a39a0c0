use async_trait::async_trait;
use sqlx::Database;
use std::error::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::AccountModel;
use crate::repository::{FindByEmail, FindById, FindOrCreateByEmail};

#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<Vec<AccountModel>>,
}

impl InMemoryAccountRepository {
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[async_trait]
impl<DB: Database> FindById<DB, AccountModel> for InMemoryAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AccountModel>, Box<dyn Error + Send + Sync>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.id == id).cloned())
    }
}

#[async_trait]
impl<DB: Database> FindByEmail<DB, AccountModel> for InMemoryAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountModel>, Box<dyn Error + Send + Sync>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.email.as_str() == email).cloned())
    }
}

#[async_trait]
impl<DB: Database> FindOrCreateByEmail<DB, AccountModel> for InMemoryAccountRepository {
    async fn find_or_create_by_email(
        &self,
        candidate: AccountModel,
    ) -> Result<(AccountModel, bool), Box<dyn Error + Send + Sync>> {
        let mut accounts = self.accounts.write().await;
        if let Some(existing) = accounts.iter().find(|a| a.email == candidate.email) {
            return Ok((existing.clone(), false));
        }
        accounts.push(candidate.clone());
        Ok((candidate, true))
    }
}
