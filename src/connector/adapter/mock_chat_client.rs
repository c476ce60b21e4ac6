use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{
    Choice, ChoiceMessage, CompletionRequest, CompletionResponse, DomainError, Role,
};

enum MockReply {
    Response(CompletionResponse),
    Failure { status: u16, body: String },
}

/// In-process [`ChatClient`] that records every request and replies with a
/// canned response.
pub struct MockChatClient {
    reply: MockReply,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockChatClient {
    pub fn with_response(response: CompletionResponse) -> Self {
        Self {
            reply: MockReply::Response(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// One choice whose message content is `content`.
    pub fn replying(content: impl Into<String>) -> Self {
        Self::with_response(CompletionResponse {
            choices: vec![Choice {
                index: 0,
                message: ChoiceMessage {
                    role: Role::Assistant,
                    content: Some(content.into()),
                },
                finish_reason: Some("stop".to_string()),
            }],
            usage: None,
        })
    }

    pub fn with_no_choices() -> Self {
        Self::with_response(CompletionResponse {
            choices: Vec::new(),
            usage: None,
        })
    }

    pub fn with_null_content() -> Self {
        Self::with_response(CompletionResponse {
            choices: vec![Choice {
                index: 0,
                message: ChoiceMessage {
                    role: Role::Assistant,
                    content: None,
                },
                finish_reason: None,
            }],
            usage: None,
        })
    }

    /// Fail every call as if the remote service answered with `status`.
    pub fn failing(status: u16, body: impl Into<String>) -> Self {
        Self {
            reply: MockReply::Failure {
                status,
                body: body.into(),
            },
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, DomainError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        debug!("MockChatClient received request for model {}", request.model());

        match &self.reply {
            MockReply::Response(response) => Ok(response.clone()),
            MockReply::Failure { status, body } => Err(DomainError::from_status(*status, body.clone())),
        }
    }
}
