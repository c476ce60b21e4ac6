use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::connector::adapter::ClientConfig;
use crate::domain::{CompletionRequest, CompletionResponse, DomainError};

const COMPLETIONS_PATH: &str = "/chat/completions";
/// Longest slice of an error body carried into [`DomainError`].
const MAX_ERROR_BODY_CHARS: usize = 512;

/// HTTP client for the OpenAI chat completions API and compatible endpoints
/// such as OpenRouter or a local LM Studio server.
///
/// Implements [`ChatClient`] so the use case stays decoupled from transport
/// and serialization details.  The underlying `reqwest::Client` lives as long
/// as this value and is released when it is dropped.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
    referer: Option<String>,
    title: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: ClientConfig) -> Result<Self, DomainError> {
        if config.api_key.trim().is_empty() {
            return Err(DomainError::missing_credential("API key is empty"));
        }

        let url = format!("{}{}", config.base_url.trim_end_matches('/'), COMPLETIONS_PATH);
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key,
            url,
            referer: config.referer,
            title: config.title,
        })
    }

    pub fn from_env() -> Result<Self, DomainError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn excerpt(body: &str) -> String {
        body.chars().take(MAX_ERROR_BODY_CHARS).collect()
    }

    fn transport_error(&self, e: reqwest::Error) -> DomainError {
        if e.is_timeout() {
            DomainError::network(format!("request to {} timed out: {e}", self.url))
        } else if e.is_connect() {
            DomainError::network(format!("could not connect to {}: {e}", self.url))
        } else {
            DomainError::network(format!("request to {} failed: {e}", self.url))
        }
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, DomainError> {
        debug!("POST {} (model {})", self.url, request.model());

        let mut builder = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(request);
        if let Some(referer) = &self.referer {
            builder = builder.header("HTTP-Referer", referer);
        }
        if let Some(title) = &self.title {
            builder = builder.header("X-Title", title);
        }

        let response = builder.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        debug!("Completion endpoint answered {status}");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiClient: API returned {status}: {body}");
            return Err(DomainError::from_status(status.as_u16(), Self::excerpt(&body)));
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        serde_json::from_str::<CompletionResponse>(&body).map_err(|e| {
            DomainError::malformed(format!("{e}; body: {}", Self::excerpt(&body)))
        })
    }
}
