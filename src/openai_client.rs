// openai_client.rs
use log::{debug, error};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::GenerationError;

/// Shared HTTP session for the OpenAI-compatible API. Every request carries
/// the JSON accept/content headers and the bearer token.
pub struct OpenAIClient {
    client: Client,
    base: String,
}

impl OpenAIClient {
    pub fn new(base: &str, api_key: &str) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(OpenAIClient {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// POSTs `body` as JSON and decodes a successful reply into `R`.
    /// Non-2xx replies and bodies that do not fit `R` are errors.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, GenerationError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| GenerationError::Transport {
                endpoint: url.clone(),
                source,
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|source| GenerationError::Transport {
            endpoint: url.clone(),
            source,
        })?;
        debug!("Response text: {}", response_text);

        if !status.is_success() {
            error!("API Error from {}: {} {}", url, status, response_text);
            return Err(GenerationError::Upstream {
                endpoint: url,
                status: status.as_u16(),
                body: response_text,
            });
        }

        serde_json::from_str(&response_text).map_err(|e| GenerationError::malformed(url, e.to_string()))
    }
}
