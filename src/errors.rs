//! Shared error types for paircheck operations.
//!
//! Discovery deliberately distinguishes two failure classes: candidates that
//! are not testable pairs (wrong arity, non-public setter) are filtered
//! silently, while a declared-type resolution failure is surfaced, since it
//! indicates a misconfigured environment rather than a mismatched accessor.

use crate::resolver::ResolveError;
use thiserror::Error;

/// Main error type for paircheck operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Declared-type resolution failed for a method position.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_error_message_passthrough() {
        let err = Error::from(ResolveError::MissingParameter {
            method: "setName".to_string(),
            index: 0,
        });
        assert_eq!(
            err.to_string(),
            "method `setName` has no parameter at index 0"
        );
    }
}
