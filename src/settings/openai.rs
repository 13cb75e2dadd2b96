//! OpenAI tuning settings.

use serde::{Deserialize, Serialize};

/// Tuning settings for OpenAI-style chat APIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAISettings {
    /// Sampling temperature. Always serialized, `null` when unset, so a
    /// round trip preserves an explicit `None`.
    pub temperature: Option<f32>,

    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,

    /// Nucleus sampling parameter.
    pub top_p: f32,

    /// Frequency penalty.
    pub frequency_penalty: f32,

    /// Presence penalty.
    pub presence_penalty: f32,

    /// Stop sequences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

impl Default for OpenAISettings {
    fn default() -> Self {
        Self {
            temperature: Some(0.7),
            max_tokens: None,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            stop: None,
        }
    }
}

#[cfg(test)]
#[path = "openai_tests.rs"]
mod tests;
