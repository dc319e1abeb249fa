mod client;
mod types;

pub use client::{CompletionClient, OpenAiCompatClient};
pub use types::Completion;
