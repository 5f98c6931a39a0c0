//! Request body extractor accepting multipart, urlencoded and JSON bodies
//!
//! Fields are resolved through one ordered list of candidate keys:
//! `parent[field]`, then `parent_field`, then the bare `field`. JSON bodies
//! additionally resolve `{"parent": {"field": ..}}` before the flat keys.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;
use serde_json::Value;
use sme_fin_api::{ApiError, UploadedFile};
use std::collections::HashMap;

use crate::response::AppError;

#[derive(Debug, Clone)]
enum Fields {
    Flat(HashMap<String, String>),
    Json(Value),
}

/// Parsed request body with its uploaded files.
#[derive(Debug, Clone)]
pub struct FormPayload {
    fields: Fields,
    files: HashMap<String, UploadedFile>,
}

/// Keys tried, in order, for `field` nested under `parent`.
pub fn candidate_keys(parent: Option<&str>, field: &str) -> Vec<String> {
    match parent {
        Some(parent) => vec![
            format!("{parent}[{field}]"),
            format!("{parent}_{field}"),
            field.to_string(),
        ],
        None => vec![field.to_string()],
    }
}

impl FormPayload {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut values = HashMap::new();
        for (key, value) in pairs {
            values.entry(key.into()).or_insert_with(|| value.into());
        }
        Self {
            fields: Fields::Flat(values),
            files: HashMap::new(),
        }
    }

    pub fn from_json(value: Value) -> Self {
        Self {
            fields: Fields::Json(value),
            files: HashMap::new(),
        }
    }

    /// First non-empty value among the candidate keys, or an empty string.
    pub fn value(&self, parent: Option<&str>, field: &str) -> String {
        let keys = candidate_keys(parent, field);
        let found = match &self.fields {
            Fields::Flat(values) => keys
                .iter()
                .filter_map(|key| values.get(key))
                .find(|value| !value.is_empty())
                .cloned(),
            Fields::Json(json) => {
                let nested = parent
                    .and_then(|parent| json.get(parent))
                    .and_then(|object| object.get(field));
                nested
                    .into_iter()
                    .chain(keys.iter().filter_map(|key| json.get(key)))
                    .filter_map(scalar)
                    .find(|value| !value.is_empty())
            }
        };
        found.unwrap_or_default()
    }

    /// Removes the first uploaded file found under the candidate keys.
    pub fn take_file(&mut self, parent: Option<&str>, field: &str) -> Option<UploadedFile> {
        candidate_keys(parent, field)
            .iter()
            .find_map(|key| self.files.remove(key))
    }
}

/// Strings as-is, numbers and booleans in their JSON spelling.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn invalid_form() -> AppError {
    AppError(ApiError::Validation("Invalid form data".to_string()))
}

fn invalid_body() -> AppError {
    AppError(ApiError::Validation("Invalid request body".to_string()))
}

#[async_trait]
impl<S> FromRequest<S> for FormPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|_| invalid_form())?;
            let mut values = HashMap::new();
            let mut files = HashMap::new();

            while let Some(field) = multipart.next_field().await.map_err(|_| invalid_form())? {
                let Some(name) = field.name().map(str::to_string) else {
                    continue;
                };
                match field.file_name().filter(|f| !f.is_empty()).map(str::to_string) {
                    Some(filename) => {
                        let bytes = field.bytes().await.map_err(|_| invalid_form())?;
                        files
                            .entry(name)
                            .or_insert_with(|| UploadedFile::new(filename, bytes.to_vec()));
                    }
                    None => {
                        let text = field.text().await.map_err(|_| invalid_form())?;
                        values.entry(name).or_insert(text);
                    }
                }
            }

            return Ok(Self {
                fields: Fields::Flat(values),
                files,
            });
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|_| invalid_form())?;
            return Ok(Self::from_pairs(pairs));
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|_| invalid_body())?;
        let json = serde_json::from_slice::<Value>(&body).map_err(|_| invalid_body())?;
        Ok(Self::from_json(json))
    }
}
