pub mod error;

pub use error::{LighthouseError, Result};

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

const LIGHTHOUSE_NODE_URL: &str = "https://node.lighthouse.storage";

/// Response from the Lighthouse add endpoint.
#[derive(Debug, Deserialize)]
struct AddResponse {
    #[serde(rename = "Hash")]
    hash: String,
}

pub struct LighthouseClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl LighthouseClient {
    pub fn new(api_key: Option<&str>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: LIGHTHOUSE_NODE_URL.to_string(),
            api_key: api_key.map(String::from),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Upload a text payload and return its content identifier (CID).
    ///
    /// Fails closed: no credential means no request is sent at all, and a
    /// response without a CID is an error, never a fabricated identifier.
    pub async fn upload_text(&self, payload: &str, name: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LighthouseError::MissingCredential)?;

        let endpoint = format!("{}/api/v0/add", self.base_url);

        let part = reqwest::multipart::Part::text(payload.to_string()).file_name(name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = self
            .client
            .post(&endpoint)
            .bearer_auth(api_key)
            .multipart(form)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(LighthouseError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: AddResponse = resp.json().await?;
        if parsed.hash.is_empty() {
            return Err(LighthouseError::MissingCid);
        }

        debug!(cid = %parsed.hash, name, "Uploaded payload to Lighthouse");
        Ok(parsed.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upload_without_credential_fails_closed() {
        let client = LighthouseClient::new(None);
        let err = client.upload_text("{}", "case").await.unwrap_err();
        assert!(matches!(err, LighthouseError::MissingCredential));
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = LighthouseClient::new(Some("key")).with_base_url("http://localhost:9999/");
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
