//! Anthropic tuning settings.

use serde::{Deserialize, Serialize};

/// Tuning settings for Anthropic-style APIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnthropicSettings {
    /// Sampling temperature. Always serialized, `null` when unset, so a
    /// round trip preserves an explicit `None`.
    pub temperature: Option<f32>,

    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,

    /// Nucleus sampling parameter.
    pub top_p: f32,

    /// Top-k sampling parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

impl Default for AnthropicSettings {
    fn default() -> Self {
        Self {
            temperature: Some(0.7),
            max_tokens: None,
            top_p: 1.0,
            top_k: None,
        }
    }
}

#[cfg(test)]
#[path = "anthropic_tests.rs"]
mod tests;
