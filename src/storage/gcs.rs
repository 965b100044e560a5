// Cloud Storage implementation
//
// Writes objects through the JSON API media-upload endpoint. The object
// key is passed as a query parameter so reqwest handles percent-encoding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::ObjectStore;
use crate::config::StorageConfig;
use crate::error::{LektioError, Result};

/// Cloud Storage implementation
pub struct GcsObjectStore {
    client: Client,
    config: StorageConfig,
}

impl GcsObjectStore {
    pub fn new(config: StorageConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("HTTP client creation should not fail");

        Self { client, config }
    }

    fn upload_url(&self, bucket: &str) -> String {
        format!("{}/upload/storage/v1/b/{}/o", self.config.endpoint, bucket)
    }
}

#[async_trait]
impl ObjectStore for GcsObjectStore {
    async fn put_text(&self, bucket: &str, key: &str, body: &str) -> Result<()> {
        let url = self.upload_url(bucket);
        debug!("Uploading {} bytes to gs://{}/{}", body.len(), bucket, key);

        let mut builder = self
            .client
            .post(&url)
            .query(&[("uploadType", "media"), ("name", key)])
            .header("Content-Type", "text/plain; charset=utf-8")
            .body(body.to_string());

        if let Some(token) = &self.config.auth_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| LektioError::Storage(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(LektioError::Storage(format!(
                "Storage API error {}: {}",
                status, error_text
            )));
        }

        info!("Report saved to gs://{}/{}", bucket, key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url() {
        let store = GcsObjectStore::new(StorageConfig {
            endpoint: "https://storage.googleapis.com".to_string(),
            timeout_secs: 120,
            auth_token: None,
        });

        assert_eq!(
            store.upload_url("esl-feedback-reports"),
            "https://storage.googleapis.com/upload/storage/v1/b/esl-feedback-reports/o"
        );
    }
}
