//! Gemini tuning settings.

use serde::{Deserialize, Serialize};

use crate::types::Metadata;

/// One harm-category threshold pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiSafetySettings {
    /// The harm category.
    pub category: String,

    /// The blocking threshold.
    pub threshold: String,
}

impl GeminiSafetySettings {
    /// Create a safety setting pair.
    pub fn new(category: impl Into<String>, threshold: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            threshold: threshold.into(),
        }
    }
}

/// Tuning settings for Gemini models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    /// Sampling temperature. Always serialized, `null` when unset, so a
    /// round trip preserves an explicit `None`.
    pub temperature: Option<f32>,

    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,

    /// Safety settings, in the order the provider should apply them.
    pub safety_settings: Vec<GeminiSafetySettings>,

    /// Additional generation config, passed through untouched.
    pub generation_config: Metadata,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            temperature: Some(0.7),
            max_tokens: None,
            safety_settings: Vec::new(),
            generation_config: Metadata::new(),
        }
    }
}

#[cfg(test)]
#[path = "gemini_tests.rs"]
mod tests;
