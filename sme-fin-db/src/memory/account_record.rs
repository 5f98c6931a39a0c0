use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Database;
use std::collections::HashMap;
use std::error::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{AccountOwned, BusinessDetailsModel, PersonalDetailsModel, TradeLicenseModel};
use crate::repository::{ExistByAccountId, FindByAccountId, UpsertByAccount};

/// Carries the persisted identity of an existing record over to its replacement
pub trait KeepIdentity {
    fn keep_identity(&mut self, id: Uuid, created_at: DateTime<Utc>);
    fn identity(&self) -> (Uuid, DateTime<Utc>);
}

macro_rules! impl_keep_identity {
    ($($model:ty),*) => {
        $(impl KeepIdentity for $model {
            fn keep_identity(&mut self, id: Uuid, created_at: DateTime<Utc>) {
                self.id = id;
                self.created_at = created_at;
            }

            fn identity(&self) -> (Uuid, DateTime<Utc>) {
                (self.id, self.created_at)
            }
        })*
    };
}

impl_keep_identity!(PersonalDetailsModel, BusinessDetailsModel, TradeLicenseModel);

/// One record per account, keyed by account id
pub struct InMemoryAccountRecordRepository<T> {
    records: RwLock<HashMap<Uuid, T>>,
}

impl<T> Default for InMemoryAccountRecordRepository<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> InMemoryAccountRecordRepository<T> {
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl<DB, T> UpsertByAccount<DB, T> for InMemoryAccountRecordRepository<T>
where
    DB: Database,
    T: AccountOwned + KeepIdentity + Clone + Send + Sync + 'static,
{
    async fn upsert(&self, mut item: T) -> Result<T, Box<dyn Error + Send + Sync>> {
        let mut records = self.records.write().await;
        if let Some(existing) = records.get(&item.get_account_id()) {
            let (id, created_at) = existing.identity();
            item.keep_identity(id, created_at);
        }
        records.insert(item.get_account_id(), item.clone());
        Ok(item)
    }
}

#[async_trait]
impl<DB, T> FindByAccountId<DB, T> for InMemoryAccountRecordRepository<T>
where
    DB: Database,
    T: AccountOwned + Clone + Send + Sync + 'static,
{
    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Option<T>, Box<dyn Error + Send + Sync>> {
        Ok(self.records.read().await.get(&account_id).cloned())
    }
}

#[async_trait]
impl<DB, T> ExistByAccountId<DB, T> for InMemoryAccountRecordRepository<T>
where
    DB: Database,
    T: AccountOwned + Send + Sync + 'static,
{
    async fn exist_by_account_id(&self, account_id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Ok(self.records.read().await.contains_key(&account_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String as HeaplessString;
    use sqlx::Postgres;

    fn business(account_id: Uuid, name: &str) -> BusinessDetailsModel {
        let now = Utc::now();
        BusinessDetailsModel {
            id: Uuid::new_v4(),
            account_id,
            business_name: HeaplessString::try_from(name).unwrap(),
            trade_license_number: HeaplessString::try_from("TL-001").unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_upsert_overwrites_in_place() -> Result<(), Box<dyn Error + Send + Sync>> {
        let repo = InMemoryAccountRecordRepository::<BusinessDetailsModel>::default();
        let account_id = Uuid::new_v4();

        let first = UpsertByAccount::<Postgres, _>::upsert(&repo, business(account_id, "Acme")).await?;
        let second = UpsertByAccount::<Postgres, _>::upsert(&repo, business(account_id, "Acme Trading")).await?;

        assert_eq!(repo.len().await, 1);
        assert_eq!(second.id, first.id);
        assert_eq!(second.created_at, first.created_at);

        let stored = FindByAccountId::<Postgres, _>::find_by_account_id(&repo, account_id)
            .await?
            .expect("record should exist");
        assert_eq!(stored.business_name.as_str(), "Acme Trading");

        Ok(())
    }
}
