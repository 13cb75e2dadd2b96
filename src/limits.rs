//! Usage limit types.

use serde::{Deserialize, Serialize};

/// Caller-side caps on request volume and size.
///
/// Carried alongside engine configuration for an enforcement layer to
/// consult; the shape itself enforces nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageLimits {
    /// Maximum input tokens allowed per request.
    pub max_input_tokens: u32,

    /// Maximum output tokens allowed per request.
    pub max_output_tokens: u32,

    /// Maximum API requests allowed per minute.
    pub max_requests_per_minute: u32,

    /// Maximum parallel requests allowed.
    pub max_parallel_requests: u32,
}

impl Default for UsageLimits {
    fn default() -> Self {
        Self {
            max_input_tokens: 8000,
            max_output_tokens: 1024,
            max_requests_per_minute: 60,
            max_parallel_requests: 5,
        }
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod tests;
