//! # Error Types — Structured Error Hierarchy
//!
//! Errors raised while parsing answer vocabularies at the boundary. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! The rules engine itself never raises for well-typed input: an
//! unrecognized enum value is rejected here, at deserialization, before any
//! rule runs. Inside the engine an absent or unanswered field suppresses the
//! relevant rule rather than producing an error.

use thiserror::Error;

/// Top-level error type for answer-model parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A wire string did not match any variant of a closed answer vocabulary.
    #[error("unknown {vocabulary} value: {value:?}")]
    UnknownValue {
        /// The vocabulary being parsed (e.g., "asset kind", "us state").
        vocabulary: &'static str,
        /// The rejected wire value.
        value: String,
    },
}

impl CoreError {
    /// Construct an `UnknownValue` error for the given vocabulary.
    pub fn unknown(vocabulary: &'static str, value: &str) -> Self {
        Self::UnknownValue {
            vocabulary,
            value: value.to_string(),
        }
    }
}
