use crate::{Error, Result};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::TransportError;

/// HTTP handle to the Gemini REST API.
///
/// Holds the pooled client, the resolved `generateContent` endpoint and the key.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    pub fn new(
        base_url: &str,
        api_version: &str,
        model: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let endpoint = Self::generate_content_url(base_url, api_version, model)?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .build()
            .map_err(TransportError::Http)?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.to_string(),
        })
    }

    /// `{base_url}/{api_version}/models/{model}:generateContent`
    fn generate_content_url(base_url: &str, api_version: &str, model: &str) -> Result<Url> {
        let mut base = base_url.trim_end_matches('/').to_string();
        base.push('/');
        let base = Url::parse(&base).map_err(|e| TransportError::InvalidUrl(e.to_string()))?;

        let model = model.strip_prefix("models/").unwrap_or(model);
        let path = format!(
            "{}/models/{}:generateContent",
            api_version.trim_matches('/'),
            model
        );
        base.join(&path)
            .map_err(|e| Error::Transport(TransportError::InvalidUrl(e.to_string())))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST a generateContent body and return the decoded JSON reply.
    pub async fn generate_content(&self, body: &Value) -> Result<Value> {
        debug!(endpoint = %self.endpoint, "sending generateContent request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(TransportError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.map_err(TransportError::Http)?;
            return Err(Self::remote_error(status, &text));
        }

        let json = response.json().await.map_err(TransportError::Http)?;
        Ok(json)
    }

    fn remote_error(status: StatusCode, body: &str) -> Error {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| {
                v.pointer("/error/message")
                    .and_then(Value::as_str)
                    .map(String::from)
            })
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("unknown").to_string()
                } else {
                    body.trim().to_string()
                }
            });
        let (class, retryable) = classify_status(status.as_u16());
        Error::Remote {
            status: status.as_u16(),
            class: class.to_string(),
            message,
            retryable,
        }
    }
}

/// Map an HTTP status to an error class and a retry hint.
pub fn classify_status(status: u16) -> (&'static str, bool) {
    match status {
        400 => ("invalid_request", false),
        401 => ("authentication", false),
        403 => ("permission_denied", false),
        404 => ("not_found", false),
        408 => ("timeout", true),
        429 => ("rate_limited", true),
        500..=599 => ("server_error", true),
        _ => ("unknown", false),
    }
}
