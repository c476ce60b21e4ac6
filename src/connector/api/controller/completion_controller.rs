use anyhow::Result;
use tracing::debug;

use super::super::Container;

pub struct CompletionController<'a> {
    container: &'a Container,
}

impl<'a> CompletionController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Run the configured prompt pair once and return the answer text.
    pub async fn ask(&self) -> Result<String> {
        let use_case = self.container.completion_use_case();
        let answer = use_case.execute(self.container.prompts()).await?;
        debug!("Received {} characters from {}", answer.chars().count(), use_case.model());
        Ok(answer)
    }
}
