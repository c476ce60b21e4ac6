use async_trait::async_trait;

use crate::domain::{CompletionRequest, CompletionResponse, DomainError};

/// An interface for sending a chat completion request to an LLM service.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details.  Consumers (e.g. [`crate::application::RequestCompletionUseCase`])
/// remain decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send one request and return the decoded response.
    ///
    /// Every call performs a fresh exchange with the remote service.
    async fn complete(&self, request: &CompletionRequest)
        -> Result<CompletionResponse, DomainError>;
}
