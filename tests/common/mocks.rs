use async_trait::async_trait;
use saarthi_rust::{
    Error, Result,
    llm::{Completion, CompletionClient},
};
use std::sync::{Arc, Mutex};

/// Mock completion client for testing
#[derive(Debug)]
pub struct MockCompletionClient {
    pub responses: Arc<Mutex<Vec<Completion>>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<Completion>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.with_responses(vec![Completion::Generated(text.to_string())])
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<Completion> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}
