//! Common utility types.

use std::collections::HashMap;

/// Metadata map type.
///
/// Escape hatch for provider-specific extension data that is passed through
/// untouched (tool definitions, extra generation config).
pub type Metadata = HashMap<String, serde_json::Value>;

/// Token count map type, keyed by counter name
/// (e.g. `prompt_tokens`, `completion_tokens`).
pub type TokenCounts = HashMap<String, u64>;
