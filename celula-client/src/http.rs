//! HTTP client for the remote persistence and storage service
//!
//! POST rest/v1/{table} — JSON record insert, `Prefer: return=minimal`
//! POST storage/v1/object/{bucket}/{name} — binary photo upload
//!
//! Public photo URLs resolve at storage/v1/object/public/{bucket}/{name}.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode, header};
use shared::CelulaRecord;
use shared::util::storage_object_name;
use std::time::Duration;
use tracing::{debug, warn};

/// Maximum photo size (20MB)
const MAX_PHOTO_SIZE: usize = 20 * 1024 * 1024;

/// Supported photo formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// HTTP client for the célula collection and photo bucket
#[derive(Debug, Clone)]
pub struct CelulaClient {
    client: Client,
    config: ClientConfig,
}

impl CelulaClient {
    /// Create a new client from configuration
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Join the base URL and a path, normalizing slashes
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Insert a validated record into the célula collection
    pub async fn insert(&self, record: &CelulaRecord) -> ClientResult<()> {
        let url = self.endpoint(&format!("rest/v1/{}", self.config.table));
        debug!(%url, nome_celula = %record.nome_celula, "inserting célula record");

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;

        Self::check(response).await
    }

    /// Upload a photo and return its publicly resolvable URL
    pub async fn upload(&self, data: Vec<u8>, extension: &str) -> ClientResult<String> {
        Self::check_photo(&data, extension)?;

        let name = storage_object_name(extension);
        let url = self.endpoint(&format!("storage/v1/object/{}/{name}", self.config.bucket));
        let content_type = mime_guess::from_ext(extension.trim_start_matches('.'))
            .first_or_octet_stream();
        debug!(%url, size = data.len(), "uploading célula photo");

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header(header::CONTENT_TYPE, content_type.as_ref())
            .body(data)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(self.public_url(&name))
    }

    /// Publicly resolvable URL for an object in the photo bucket
    pub fn public_url(&self, name: &str) -> String {
        self.endpoint(&format!(
            "storage/v1/object/public/{}/{name}",
            self.config.bucket
        ))
    }

    /// Validate a photo before any network traffic
    fn check_photo(data: &[u8], extension: &str) -> ClientResult<()> {
        if data.is_empty() {
            return Err(ClientError::Validation("Empty file".to_string()));
        }

        if data.len() > MAX_PHOTO_SIZE {
            return Err(ClientError::Validation(format!(
                "File too large: {} bytes (max {MAX_PHOTO_SIZE})",
                data.len()
            )));
        }

        let ext = extension.trim_start_matches('.').to_lowercase();
        if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
            return Err(ClientError::Validation(format!(
                "Unsupported format: {ext}. Supported: png, jpg, jpeg, webp"
            )));
        }

        Ok(())
    }

    /// Handle the HTTP response status
    async fn check(response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await?;
        warn!(%status, "service returned an error");
        Err(Self::map_status(status, text))
    }

    /// Map an error status and body to a client error
    fn map_status(status: StatusCode, text: String) -> ClientError {
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Internal(text),
        }
    }
}
