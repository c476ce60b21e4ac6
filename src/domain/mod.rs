//! # Domain Layer
//!
//! Chat completion data model and the error taxonomy.
//! This layer is independent of the HTTP client and the CLI.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
