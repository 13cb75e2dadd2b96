//! Schema validation errors.

use thiserror::Error;

/// Error raised when constructing or serializing a schema shape.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A required field was missing or a value had an incompatible type.
    #[error("Validation failed for {type_name}: {source}")]
    Validation {
        type_name: &'static str,
        source: serde_json::Error,
    },

    /// A shape could not be serialized to a JSON mapping.
    #[error("Serialization failed for {type_name}: {source}")]
    Serialize {
        type_name: &'static str,
        source: serde_json::Error,
    },
}
