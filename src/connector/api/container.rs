use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{ChatClient, RequestCompletionUseCase};
use crate::connector::adapter::{ClientConfig, OpenAiClient};
use crate::domain::PromptPair;

/// Command-line overrides applied on top of the environment configuration.
#[derive(Debug, Clone, Default)]
pub struct ContainerConfig {
    pub model: Option<String>,
    pub system_prompt: Option<String>,
    pub user_prompt: Option<String>,
}

pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    model: String,
    prompts: PromptPair,
}

impl Container {
    /// Build the HTTP-backed container from the environment.
    ///
    /// Fails before any network activity when the credential is missing.
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let mut client_config = ClientConfig::from_env()?;
        if let Some(model) = config.model.clone() {
            client_config = client_config.with_model(model);
        }
        debug!("Client configuration: {:?}", client_config);

        let model = client_config.model.clone();
        let chat_client: Arc<dyn ChatClient> = Arc::new(OpenAiClient::new(client_config)?);

        Ok(Self::with_client(chat_client, model, &config))
    }

    pub fn with_client(
        chat_client: Arc<dyn ChatClient>,
        model: impl Into<String>,
        config: &ContainerConfig,
    ) -> Self {
        let mut prompts = PromptPair::default();
        if let Some(system) = &config.system_prompt {
            prompts = prompts.with_system(system.as_str());
        }
        if let Some(user) = &config.user_prompt {
            prompts = prompts.with_user(user.as_str());
        }

        Self {
            chat_client,
            model: model.into(),
            prompts,
        }
    }

    pub fn completion_use_case(&self) -> RequestCompletionUseCase {
        RequestCompletionUseCase::new(self.chat_client.clone(), self.model.clone())
    }

    pub fn prompts(&self) -> &PromptPair {
        &self.prompts
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}
