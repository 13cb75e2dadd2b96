//! Inference response types.

use serde::{Deserialize, Serialize};

use crate::types::TokenCounts;

/// Result of one inference call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AIResponse {
    /// The generated content.
    pub content: String,

    /// Token usage statistics, keyed by counter name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenCounts>,

    /// Model that produced the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Reason the model stopped generating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl AIResponse {
    /// Create a response with the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            usage: None,
            model: None,
            finish_reason: None,
        }
    }

    /// Set the usage statistics.
    pub fn with_usage(mut self, usage: TokenCounts) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the finish reason.
    pub fn with_finish_reason(mut self, finish_reason: impl Into<String>) -> Self {
        self.finish_reason = Some(finish_reason.into());
        self
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
