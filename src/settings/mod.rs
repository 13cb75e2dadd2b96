//! Provider-specific tuning settings.
//!
//! Each settings shape reproduces the corresponding provider API's parameter
//! names and defaults and is passed through to that provider opaquely.

mod anthropic;
mod gemini;
mod openai;

pub use anthropic::*;
pub use gemini::*;
pub use openai::*;
