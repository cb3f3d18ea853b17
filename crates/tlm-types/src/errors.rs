//! # Error Types
//!
//! Defines error types used across crates.

use thiserror::Error;

/// Errors raised while building or parsing a component identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// Empty path or empty segment (e.g. `"top..env"`).
    #[error("Empty name segment in component path: {path:?}")]
    EmptySegment { path: String },

    /// A single name contained the hierarchy separator.
    #[error("Name {name:?} must not contain '.'")]
    SeparatorInName { name: String },
}
