//! Scriptable stand-in for the generation backend, used by the
//! orchestrator tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::engine::error::GenError;
use crate::engine::llm_client::TextGenerator;

pub struct StubGenerator {
    // Per-call script; None means "this call fails". When the script
    // runs out, `fallback` applies.
    script: RefCell<VecDeque<Option<String>>>,
    fallback: Option<String>,
    prompts: RefCell<Vec<String>>,
}

impl StubGenerator {
    /// Always answers with the same text.
    pub fn replying(text: &str) -> Self {
        Self {
            script: RefCell::new(VecDeque::new()),
            fallback: Some(text.to_string()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// Always fails.
    pub fn failing() -> Self {
        Self {
            script: RefCell::new(VecDeque::new()),
            fallback: None,
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// One entry per expected call, in order.
    pub fn scripted(replies: Vec<Option<&str>>) -> Self {
        Self {
            script: RefCell::new(replies.into_iter().map(|r| r.map(String::from)).collect()),
            fallback: None,
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl TextGenerator for StubGenerator {
    fn generate(&self, prompt: &str, _max_output_tokens: u32) -> Result<String, GenError> {
        self.prompts.borrow_mut().push(prompt.to_string());

        let next = self
            .script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        next.ok_or(GenError::EmptyResponse)
    }
}
