use std::sync::Arc;

use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{CompletionRequest, DomainError, PromptPair};

/// Sends one system + user prompt pair and returns the first choice's text.
pub struct RequestCompletionUseCase {
    client: Arc<dyn ChatClient>,
    model: String,
}

impl RequestCompletionUseCase {
    pub fn new(client: Arc<dyn ChatClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn execute(&self, prompts: &PromptPair) -> Result<String, DomainError> {
        let request = CompletionRequest::from_prompts(&self.model, prompts);
        debug!(
            "Requesting completion from model {} ({} messages)",
            request.model(),
            request.messages().len()
        );

        let response = self.client.complete(&request).await?;

        if let Some(usage) = response.usage {
            debug!(
                "Token usage: {} prompt + {} completion = {} total",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        if response.is_empty() {
            return Err(DomainError::empty_response("no choices returned"));
        }

        response
            .first_content()
            .map(str::to_string)
            .ok_or_else(|| DomainError::empty_response("first choice has no content"))
    }
}
