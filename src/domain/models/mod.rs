mod completion;
mod message;
mod prompt;

pub use completion::*;
pub use message::*;
pub use prompt::*;
