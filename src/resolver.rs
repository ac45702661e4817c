//! Declared-type resolution.
//!
//! The validator obtains types through the `DeclaredTypeResolver` trait, so
//! hosts with richer type information (generics, docblock parsers, language
//! servers) can plug in their own resolver. `SignatureResolver` is the
//! default: it merges a position's native declaration text with its
//! documentation-based annotation and normalizes the result.
//!
//! Resolution failures are fatal. A position that cannot be resolved means
//! the surrounding environment is misconfigured, not that the accessor pair
//! is invalid, so errors propagate instead of being folded into a rejection.

use crate::metadata::MethodMetadata;
use crate::types::DeclaredType;
use thiserror::Error;

/// Errors raised while resolving a declared type for a method position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("method `{method}` has no parameter at index {index}")]
    MissingParameter { method: String, index: usize },

    #[error("malformed type declaration `{text}` on method `{method}`: {reason}")]
    MalformedDeclaration {
        method: String,
        text: String,
        reason: String,
    },
}

/// Produces one coherent `DeclaredType` per method position.
pub trait DeclaredTypeResolver: Sync {
    fn resolve_param_type(
        &self,
        method: &dyn MethodMetadata,
        index: usize,
    ) -> Result<DeclaredType, ResolveError>;

    fn resolve_return_type(&self, method: &dyn MethodMetadata)
        -> Result<DeclaredType, ResolveError>;
}

/// Fallback type for positions with no declaration and no annotation.
const UNTYPED: &str = "mixed";

/// Default resolver over signature text.
///
/// Annotation text wins over the native declaration when both are present,
/// since annotations carry the more specific shape (`string[]` where the
/// native declaration can only say `array`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureResolver;

impl SignatureResolver {
    pub fn new() -> Self {
        Self
    }

    fn resolve_text(
        &self,
        method: &dyn MethodMetadata,
        annotation: Option<&str>,
        declaration: Option<&str>,
    ) -> Result<DeclaredType, ResolveError> {
        match annotation.or(declaration) {
            Some(text) => {
                normalize_type_text(text).map_err(|reason| ResolveError::MalformedDeclaration {
                    method: method.name().to_string(),
                    text: text.to_string(),
                    reason,
                })
            }
            None => Ok(DeclaredType::named(UNTYPED)),
        }
    }
}

impl DeclaredTypeResolver for SignatureResolver {
    fn resolve_param_type(
        &self,
        method: &dyn MethodMetadata,
        index: usize,
    ) -> Result<DeclaredType, ResolveError> {
        let parameter =
            method
                .parameters()
                .get(index)
                .ok_or_else(|| ResolveError::MissingParameter {
                    method: method.name().to_string(),
                    index,
                })?;
        self.resolve_text(
            method,
            parameter.type_annotation.as_deref(),
            parameter.type_declaration.as_deref(),
        )
    }

    fn resolve_return_type(
        &self,
        method: &dyn MethodMetadata,
    ) -> Result<DeclaredType, ResolveError> {
        self.resolve_text(method, method.return_annotation(), method.return_declaration())
    }
}

/// Normalize declaration text into a `DeclaredType`.
///
/// Recognized shapes: `?T`, `T[]`, `T|null`, `null|T`, and plain names.
/// Nesting composes (`?string[]` is a nullable array of string).
fn normalize_type_text(text: &str) -> Result<DeclaredType, String> {
    let text = text.trim();
    if text.is_empty() {
        return Err("empty type text".to_string());
    }

    if let Some(inner) = text.strip_prefix('?') {
        return Ok(DeclaredType::nullable(normalize_type_text(inner)?));
    }
    if let Some(inner) = text.strip_suffix("|null") {
        return Ok(DeclaredType::nullable(normalize_type_text(inner)?));
    }
    if let Some(inner) = text.strip_prefix("null|") {
        return Ok(DeclaredType::nullable(normalize_type_text(inner)?));
    }
    if text.contains('|') {
        return Err("unsupported union type".to_string());
    }
    if let Some(element) = text.strip_suffix("[]") {
        return Ok(DeclaredType::array_of(normalize_type_text(element)?));
    }
    Ok(DeclaredType::named(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::MethodModel;

    fn resolve(text: &str) -> DeclaredType {
        normalize_type_text(text).unwrap()
    }

    #[test]
    fn test_normalize_plain_name() {
        assert_eq!(resolve("string"), DeclaredType::named("string"));
        assert_eq!(resolve("  Foo\\Bar  "), DeclaredType::named("Foo\\Bar"));
    }

    #[test]
    fn test_normalize_question_mark_prefix() {
        assert_eq!(
            resolve("?string"),
            DeclaredType::nullable(DeclaredType::named("string"))
        );
    }

    #[test]
    fn test_normalize_array_suffix() {
        assert_eq!(
            resolve("string[]"),
            DeclaredType::array_of(DeclaredType::named("string"))
        );
    }

    #[test]
    fn test_normalize_null_union() {
        let expected = DeclaredType::nullable(DeclaredType::named("int"));
        assert_eq!(resolve("int|null"), expected);
        assert_eq!(resolve("null|int"), expected);
    }

    #[test]
    fn test_normalize_nullable_array() {
        let expected =
            DeclaredType::nullable(DeclaredType::array_of(DeclaredType::named("string")));
        assert_eq!(resolve("?string[]"), expected);
        assert_eq!(resolve("string[]|null"), expected);
        assert_eq!(expected.canonical_string(), "string[]|null");
    }

    #[test]
    fn test_normalize_rejects_malformed_text() {
        assert!(normalize_type_text("").is_err());
        assert!(normalize_type_text("?").is_err());
        assert!(normalize_type_text("[]").is_err());
        assert!(normalize_type_text("int|string").is_err());
    }

    #[test]
    fn test_annotation_preferred_over_declaration() {
        let method = MethodModel::public("setTags")
            .param("tags", "array")
            .annotate_last_param("string[]");

        let resolved = SignatureResolver::new()
            .resolve_param_type(&method, 0)
            .unwrap();
        assert_eq!(
            resolved,
            DeclaredType::array_of(DeclaredType::named("string"))
        );
    }

    #[test]
    fn test_untyped_position_resolves_to_mixed() {
        let method = MethodModel::public("setValue").untyped_param("value");
        let resolver = SignatureResolver::new();

        assert_eq!(
            resolver.resolve_param_type(&method, 0).unwrap(),
            DeclaredType::named("mixed")
        );
        assert_eq!(
            resolver.resolve_return_type(&method).unwrap(),
            DeclaredType::named("mixed")
        );
    }

    #[test]
    fn test_missing_parameter_is_an_error() {
        let method = MethodModel::public("getValue");
        let err = SignatureResolver::new()
            .resolve_param_type(&method, 0)
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::MissingParameter {
                method: "getValue".to_string(),
                index: 0,
            }
        );
    }

    #[test]
    fn test_malformed_return_declaration_is_an_error() {
        let method = MethodModel::public("getValue").returns("int|string");
        let err = SignatureResolver::new()
            .resolve_return_type(&method)
            .unwrap_err();
        assert!(matches!(err, ResolveError::MalformedDeclaration { .. }));
    }
}
