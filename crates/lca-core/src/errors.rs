//! Cross-cutting error types for the LCA workspace.
//!
//! Domain-specific errors (`DatabaseError`, `EngineError`, `ConfigError`) are
//! defined in their respective crates. A unified error is deferred to `lca-cli`
//! where all crate errors converge.

use thiserror::Error;

/// Errors that can be raised by any LCA crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An assessment identifier was missing, non-numeric, or not positive.
    #[error("Invalid assessment identifier: {0}")]
    InvalidIdentifier(String),

    /// Data failed validation (ranges, factors, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
