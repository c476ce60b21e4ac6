pub mod container;
pub mod controller;

pub use container::{Container, ContainerConfig};
pub use controller::CompletionController;
