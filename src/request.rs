//! Inference request types.

use serde::{Deserialize, Serialize};

use crate::types::Metadata;

/// One inference call's input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AIRequest {
    /// The input prompt or message.
    pub prompt: String,

    /// System message or instruction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Whether to stream the response.
    #[serde(default)]
    pub stream: bool,

    /// Tools available to the model, in provider wire format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Metadata>>,
}

fn default_temperature() -> f32 {
    0.7
}

impl AIRequest {
    /// Create a request with the given prompt and default tuning.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: None,
            temperature: 0.7,
            max_tokens: None,
            stream: false,
            tools: None,
        }
    }

    /// Set the system message.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set max tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set whether to stream the response.
    pub fn with_stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    /// Set the tools available to the model.
    pub fn with_tools(mut self, tools: Vec<Metadata>) -> Self {
        self.tools = Some(tools);
        self
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
