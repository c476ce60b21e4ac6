pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{ChatClient, RequestCompletionUseCase};

pub use cli::Cli;

pub use connector::{
    ClientConfig, CompletionController, Container, ContainerConfig, MockChatClient, OpenAiClient,
};

pub use domain::{
    ChatMessage, Choice, ChoiceMessage, CompletionRequest, CompletionResponse, DomainError,
    PromptPair, Role, Usage, DEFAULT_SYSTEM_PROMPT, DEFAULT_USER_PROMPT,
};
