pub mod completion_controller;

pub use completion_controller::CompletionController;
