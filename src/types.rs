//! Declared-type representation.
//!
//! A `DeclaredType` is the normalized form of a method's return type or a
//! parameter's type. Compatibility decisions compare canonical strings, so a
//! resolver that can only express `string[]|null` as an opaque named type
//! still participates in the array fallback rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized declared type for one method position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclaredType {
    /// A class name or scalar keyword, compared by exact name.
    Named(String),
    /// An array of some element type.
    ArrayOf(Box<DeclaredType>),
    /// The `T|null` union.
    Nullable(Box<DeclaredType>),
}

impl DeclaredType {
    pub fn named(name: impl Into<String>) -> Self {
        DeclaredType::Named(name.into())
    }

    pub fn array_of(element: DeclaredType) -> Self {
        DeclaredType::ArrayOf(Box::new(element))
    }

    pub fn nullable(inner: DeclaredType) -> Self {
        DeclaredType::Nullable(Box::new(inner))
    }

    /// Element type when this is structurally an array, `None` otherwise.
    pub fn element_type(&self) -> Option<&DeclaredType> {
        match self {
            DeclaredType::ArrayOf(element) => Some(element),
            _ => None,
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, DeclaredType::Nullable(_))
    }

    /// Canonical string form: `T` for named types, `T[]` for arrays,
    /// `T|null` for nullable types.
    pub fn canonical_string(&self) -> String {
        match self {
            DeclaredType::Named(name) => name.clone(),
            DeclaredType::ArrayOf(element) => format!("{}[]", element.canonical_string()),
            DeclaredType::Nullable(inner) => format!("{}|null", inner.canonical_string()),
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_string())
    }
}
