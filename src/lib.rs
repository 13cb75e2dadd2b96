//! # LLM Schemas
//!
//! Data shapes for talking to LLM providers: request and response payloads,
//! engine configuration, per-provider tuning settings, and usage limits.
//! Contains only value types - no transport, no dispatch, no enforcement.
//!
//! ## Shapes
//!
//! - [`AIRequest`] / [`AIResponse`] - one inference call's input and output
//! - [`AIEngineConfig`] - configuration bundle for a calling client
//! - [`UsageLimits`] - caller-side caps on request volume and size
//! - [`GeminiSettings`], [`OpenAISettings`], [`AnthropicSettings`] -
//!   provider-specific tuning passed through to the provider API
//!
//! Every shape is constructible from a JSON mapping via [`from_value`], which
//! checks required fields and types and fills documented defaults. Field
//! names and default values mirror the provider APIs and are part of the
//! wire contract.

pub mod engine;
pub mod error;
pub mod limits;
pub mod request;
pub mod response;
pub mod settings;
pub mod types;

pub use engine::AIEngineConfig;
pub use error::SchemaError;
pub use limits::UsageLimits;
pub use request::AIRequest;
pub use response::AIResponse;
pub use settings::{AnthropicSettings, GeminiSafetySettings, GeminiSettings, OpenAISettings};
pub use types::{Metadata, TokenCounts};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Construct a shape from a JSON mapping.
///
/// Fails when a required field is missing or a value cannot be interpreted
/// as the declared field type. Fields absent from the mapping take their
/// documented defaults; unknown keys are ignored. Float-typed values are
/// rejected for integer fields, even when the fraction is zero.
pub fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, SchemaError> {
    serde_json::from_value(value).map_err(|source| SchemaError::Validation {
        type_name: std::any::type_name::<T>(),
        source,
    })
}

/// Serialize a shape back to a JSON mapping.
///
/// For any valid instance, feeding the result back through [`from_value`]
/// yields a value-equal instance.
pub fn to_value<T: Serialize>(value: &T) -> Result<serde_json::Value, SchemaError> {
    serde_json::to_value(value).map_err(|source| SchemaError::Serialize {
        type_name: std::any::type_name::<T>(),
        source,
    })
}
