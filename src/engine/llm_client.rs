use anyhow::Result;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::error::GenError;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const MODELS_URL: &str = "https://api.anthropic.com/v1/models";
const API_VERSION: &str = "2023-06-01";

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

#[derive(Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

/// The one seam between the pipeline and any text-generation backend.
/// Orchestrators only ever see this trait.
pub trait TextGenerator {
    fn generate(&self, prompt: &str, max_output_tokens: u32) -> Result<String, GenError>;
}

/// Outcome of looking for a usable API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Resolved(String),
    Unresolved,
}

/// A non-blank inline key wins; otherwise fall back to the
/// ANTHROPIC_API_KEY environment variable.
pub fn resolve_credential(inline_key: &str) -> Credential {
    let inline_key = inline_key.trim();
    if !inline_key.is_empty() {
        return Credential::Resolved(inline_key.to_string());
    }
    match std::env::var("ANTHROPIC_API_KEY") {
        Ok(key) if !key.trim().is_empty() => Credential::Resolved(key.trim().to_string()),
        _ => Credential::Unresolved,
    }
}

pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }
}

impl TextGenerator for AnthropicClient {
    fn generate(&self, prompt: &str, max_output_tokens: u32) -> Result<String, GenError> {
        let req = MessagesRequest {
            model: self.model.clone(),
            max_tokens: max_output_tokens,
            messages: vec![ChatMessage {
                role: "user".into(),
                content: prompt.to_string(),
            }],
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "sending generation request");

        let resp = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&req)
            .send()?
            .error_for_status()?
            .json::<MessagesResponse>()?;

        let text = resp
            .content
            .iter()
            .filter(|block| block.kind == "text")
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() {
            return Err(GenError::EmptyResponse);
        }

        Ok(text)
    }
}

/// Cheap key check used by the Settings tab: lists available models.
pub fn test_connection(api_key: &str) -> Result<String> {
    let client = Client::new();

    let resp: serde_json::Value = client
        .get(MODELS_URL)
        .header("x-api-key", api_key)
        .header("anthropic-version", API_VERSION)
        .send()?
        .error_for_status()?
        .json()?;

    Ok(format!(
        "Connected ({} models available)",
        resp["data"].as_array().map(|a| a.len()).unwrap_or(0)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_key_beats_everything() {
        assert_eq!(
            resolve_credential("  sk-inline  "),
            Credential::Resolved("sk-inline".to_string())
        );
    }

    #[test]
    fn blank_inline_key_never_resolves_to_a_blank_secret() {
        // The env-var branch depends on process state, so only the
        // invariant is asserted here.
        match resolve_credential("   ") {
            Credential::Resolved(key) => assert!(!key.trim().is_empty()),
            Credential::Unresolved => {}
        }
    }
}
