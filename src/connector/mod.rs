//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completions over HTTP (OpenAI-compatible endpoints)
//! - An in-process mock client for tests
//! - Wiring of configuration, client, and use case for the CLI

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
