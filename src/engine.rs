//! Engine configuration types.

use serde::{Deserialize, Serialize};

use crate::limits::UsageLimits;

/// Configuration bundle for a calling client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AIEngineConfig {
    /// Name of the model to use.
    pub model_name: String,

    /// Name of the feature using the engine, for monitoring.
    pub feature_name: String,

    /// API key. Falls back to the provider's environment variable when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL override for the provider API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Usage limits for this engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limits: Option<UsageLimits>,
}

fn default_timeout() -> u64 {
    60
}

impl AIEngineConfig {
    /// Create a config for the given model and feature.
    pub fn new(model_name: impl Into<String>, feature_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            feature_name: feature_name.into(),
            api_key: None,
            base_url: None,
            timeout: 60,
            usage_limits: None,
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set usage limits.
    pub fn with_usage_limits(mut self, usage_limits: UsageLimits) -> Self {
        self.usage_limits = Some(usage_limits);
        self
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
