//! Uploaded documents and the store they are written to

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::path::Path;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// Extensions accepted for trade license documents.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

/// Upper bound on an uploaded document, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// A file received with a request, held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Lower-cased extension of the original filename.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
    }

    pub fn check(&self) -> ApiResult<()> {
        let allowed = self
            .extension()
            .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()));
        if !allowed {
            return Err(ApiError::Validation(
                "Invalid file type. Only PDF, JPG, and PNG files are allowed".to_string(),
            ));
        }
        if self.bytes.is_empty() || self.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(ApiError::Validation("File size exceeds 10MB limit".to_string()));
        }
        Ok(())
    }

    /// Object name under which the file is stored: `<uuid>_<unix-seconds>.<ext>`.
    pub fn object_name(&self, id: Uuid, now: DateTime<Utc>) -> String {
        let ext = self.extension().unwrap_or_default();
        format!("{}_{}.{}", id, now.timestamp(), ext)
    }

    pub fn content_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("pdf") => "application/pdf",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("png") => "image/png",
            _ => "application/octet-stream",
        }
    }
}

/// Object storage receiving uploaded documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Stores the file and returns its public URL.
    async fn upload(&self, file: &UploadedFile) -> Result<String, Box<dyn Error + Send + Sync>>;
}
