//! Supabase storage client for uploaded trade license documents

use async_trait::async_trait;
use sme_fin_api::{Clock, DocumentStore, UploadedFile};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::config::StorageConfig;

const UPLOAD_TIMEOUT: Duration = Duration::from_secs(30);

pub struct SupabaseStorage {
    client: reqwest::Client,
    config: StorageConfig,
    clock: Arc<dyn Clock>,
}

impl SupabaseStorage {
    pub fn new(config: StorageConfig, clock: Arc<dyn Clock>) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(UPLOAD_TIMEOUT).build()?;
        Ok(Self {
            client,
            config,
            clock,
        })
    }

    pub fn upload_url(&self, object_name: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.config.url, self.config.bucket, object_name
        )
    }

    pub fn public_url(&self, object_name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.url, self.config.bucket, object_name
        )
    }
}

#[async_trait]
impl DocumentStore for SupabaseStorage {
    async fn upload(&self, file: &UploadedFile) -> Result<String, Box<dyn Error + Send + Sync>> {
        let object_name = file.object_name(Uuid::new_v4(), self.clock.now());

        let response = self
            .client
            .post(self.upload_url(&object_name))
            .bearer_auth(&self.config.api_key)
            .header("apikey", &self.config.api_key)
            .header("x-upsert", "true")
            .header(reqwest::header::CONTENT_TYPE, file.content_type())
            .body(file.bytes.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("storage upload failed with status {status}: {body}").into());
        }

        tracing::debug!(object = %object_name, bucket = %self.config.bucket, "Uploaded document");
        Ok(self.public_url(&object_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sme_fin_api::SystemClock;

    #[test]
    fn test_urls() {
        let storage = SupabaseStorage::new(
            StorageConfig {
                url: "https://proj.supabase.co".to_string(),
                api_key: "key".to_string(),
                bucket: "docs".to_string(),
            },
            Arc::new(SystemClock),
        )
        .unwrap();

        assert_eq!(
            storage.upload_url("a_1.pdf"),
            "https://proj.supabase.co/storage/v1/object/docs/a_1.pdf"
        );
        assert_eq!(
            storage.public_url("a_1.pdf"),
            "https://proj.supabase.co/storage/v1/object/public/docs/a_1.pdf"
        );
    }
}
