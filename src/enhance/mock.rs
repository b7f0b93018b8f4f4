//! In-memory enhancer for tests

use super::{EnhanceError, EnhanceInput, EnhancedDescription, Enhancer};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Queue-driven [`Enhancer`] that records every call it receives.
pub struct MockEnhancer {
    responses: Mutex<VecDeque<Result<EnhancedDescription, EnhanceError>>>,
    calls: Mutex<Vec<EnhanceInput>>,
}

impl MockEnhancer {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Shorthand for a mock that returns `text` on its first call.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.add_text(text);
        mock
    }

    pub fn add_text(&self, text: impl Into<String>) {
        self.add_response(Ok(EnhancedDescription {
            enhanced_description: text.into(),
        }));
    }

    pub fn add_error(&self, error: EnhanceError) {
        self.add_response(Err(error));
    }

    pub fn add_response(&self, response: Result<EnhancedDescription, EnhanceError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn remaining_responses(&self) -> usize {
        self.responses.lock().unwrap().len()
    }

    /// Inputs received so far, in call order.
    pub fn calls(&self) -> Vec<EnhanceInput> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockEnhancer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Enhancer for MockEnhancer {
    async fn enhance(&self, input: EnhanceInput) -> Result<EnhancedDescription, EnhanceError> {
        self.calls.lock().unwrap().push(input);

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(EnhanceError::Configuration {
                    message: "MockEnhancer: no more responses in queue".to_string(),
                })
            })
    }

    fn name(&self) -> &str {
        "MockEnhancer"
    }
}
