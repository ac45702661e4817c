//! Pair validation.
//!
//! Decides whether a candidate pair's getter return type is acceptable to
//! its setter. Only one direction of substitutability is checked: the setter
//! must accept everything the getter can produce, limited to the exact
//! nullable and array shapes that occur in value-object accessors. This is
//! not a general covariance check.

use crate::pair::AccessorPair;
use crate::resolver::{DeclaredTypeResolver, ResolveError};
use crate::types::DeclaredType;
use log::trace;

/// Validates candidate accessor pairs against a declared-type resolver.
pub struct PairValidator<'r> {
    resolver: &'r dyn DeclaredTypeResolver,
}

impl<'r> PairValidator<'r> {
    pub fn new(resolver: &'r dyn DeclaredTypeResolver) -> Self {
        Self { resolver }
    }

    /// Check the getter's return type against the setter's parameter type.
    ///
    /// Arity mismatches yield `Ok(false)`: most getters simply have no
    /// testable setter, so a malformed candidate is filtered, not reported.
    /// Resolution failures are returned as errors.
    pub fn is_valid(&self, pair: &AccessorPair<'_>) -> Result<bool, ResolveError> {
        let getter = pair.getter();
        let setter = pair.setter();

        // Only pairs where the getter takes nothing and the setter takes a
        // single value (possibly variadic) can be checked.
        if getter.parameter_count() != 0 {
            return Ok(false);
        }
        if setter.parameter_count() != 1 {
            return Ok(false);
        }

        let parameter = &setter.parameters()[0];
        let param_type = self.resolver.resolve_param_type(setter, 0)?;
        let return_type = self.resolver.resolve_return_type(getter)?;

        let accepted = if pair.is_multi_valued() || parameter.is_variadic {
            multi_valued_match(&param_type, &return_type)
        } else {
            single_valued_match(&param_type, &return_type)
        };
        trace!(
            "{}::{} / {}: param `{param_type}`, return `{return_type}` -> {accepted}",
            pair.class_name(),
            getter.name(),
            setter.name(),
        );
        Ok(accepted)
    }
}

/// The getter should return the collection the setter feeds elements into.
fn multi_valued_match(param_type: &DeclaredType, return_type: &DeclaredType) -> bool {
    if let Some(element) = return_type.element_type() {
        if element.canonical_string() == param_type.canonical_string() {
            return true;
        }
    }

    // Allow the getter to return a typed array or null, even when the
    // resolver did not model the array structurally.
    return_type.canonical_string() == format!("{}[]|null", param_type.canonical_string())
}

/// The getter should return the same value, or that value or null.
fn single_valued_match(param_type: &DeclaredType, return_type: &DeclaredType) -> bool {
    let param = param_type.canonical_string();
    let returned = return_type.canonical_string();
    param == returned || format!("{param}|null") == returned
}
