//! # Application Layer
//!
//! Use cases coordinating the domain model and the chat client seam.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
