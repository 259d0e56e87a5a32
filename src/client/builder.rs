use crate::client::config::ClientConfig;
use crate::client::core::GeminiChatClient;
use crate::drivers::GeminiDriver;
use crate::error::{Error, ErrorContext};
use crate::tokens::WhitespaceCounter;
use crate::transport::HttpTransport;
use crate::Result;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`GeminiChatClient`].
///
/// Keep this surface area small and predictable.
pub struct GeminiClientBuilder {
    config: ClientConfig,
}

impl GeminiClientBuilder {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            config: ClientConfig::new(model),
        }
    }

    /// Start from a loaded configuration.
    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Start from defaults overlaid with `GEMINI_*` environment variables.
    pub fn from_env(model: impl Into<String>) -> Self {
        Self::from_env_with(model, |key| std::env::var(key).ok())
    }

    pub(crate) fn from_env_with(
        model: impl Into<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        Self::from_config(ClientConfig::new(model).apply_env_with(lookup))
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Override the API base URL.
    ///
    /// This is primarily for testing with mock servers.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = version.into();
        self
    }

    /// Per-request HTTP timeout, rounded up to whole seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        let secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        self.config.timeout_secs = secs.max(1);
        self
    }

    /// Maximum number of tool invocations resolved within one `complete` call.
    pub fn max_tool_rounds(mut self, n: usize) -> Self {
        self.config.max_tool_rounds = n;
        self
    }

    pub fn temperature(mut self, temp: f64) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    pub fn max_output_tokens(mut self, max: u32) -> Self {
        self.config.max_output_tokens = Some(max);
        self
    }

    /// Build the client.
    ///
    /// A missing or blank key is rejected here. Its format is not checked; a
    /// bad key surfaces as a remote authentication error on the first call.
    pub fn build(self) -> Result<GeminiChatClient> {
        let config = self.config;

        if config.model.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "model identifier is empty",
                ErrorContext::new()
                    .with_field_path("model")
                    .with_source("client_builder"),
            ));
        }

        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "no API key configured",
                    ErrorContext::new()
                        .with_field_path("api_key")
                        .with_details("set it on the builder or via GEMINI_API_KEY")
                        .with_source("client_builder"),
                )
            })?;

        let transport = HttpTransport::new(
            &config.base_url,
            &config.api_version,
            &config.model,
            api_key,
            config.timeout(),
        )?;

        tracing::debug!(
            model = %config.model,
            endpoint = %transport.endpoint(),
            max_tool_rounds = config.max_tool_rounds,
            "gemini client ready"
        );

        Ok(GeminiChatClient {
            model: config.model.clone(),
            transport: Arc::new(transport),
            driver: GeminiDriver::new(config.generation_options()),
            max_tool_rounds: config.max_tool_rounds,
            counter: WhitespaceCounter::new(),
        })
    }
}
