use serde::{Deserialize, Serialize};

use crate::engine::llm_client::DEFAULT_MODEL;

/// Settings that survive restarts. The API key is deliberately not
/// here: it lives only in the session.
#[derive(Serialize, Deserialize, Clone)]
pub struct UiSettings {
    pub ui_scale: f32,
    pub model: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}
