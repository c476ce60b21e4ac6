mod request_completion;

pub use request_completion::*;
