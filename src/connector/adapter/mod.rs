mod client_config;
mod mock_chat_client;
mod openai_client;

pub use client_config::*;
pub use mock_chat_client::*;
pub use openai_client::*;
