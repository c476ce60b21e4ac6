use clap::Parser;

use crate::connector::ContainerConfig;

/// Send one chat completion request and print the answer.
///
/// With no arguments the built-in system and user prompts are sent to the
/// model named by `OPENAI_MODEL` (default `gpt-4.1-mini`).
#[derive(Debug, Parser)]
#[command(name = "chatshot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Model identifier, overrides OPENAI_MODEL
    #[arg(short, long)]
    pub model: Option<String>,

    /// System prompt to send instead of the built-in one
    #[arg(short, long)]
    pub system: Option<String>,

    /// User prompt to send instead of the built-in one
    #[arg(short, long)]
    pub prompt: Option<String>,
}

impl Cli {
    pub fn container_config(&self) -> ContainerConfig {
        ContainerConfig {
            model: self.model.clone(),
            system_prompt: self.system.clone(),
            user_prompt: self.prompt.clone(),
        }
    }
}
