//! Accessor pair value type.

use crate::metadata::MethodMetadata;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One candidate getter/setter pairing on a class.
///
/// Immutable once constructed. `is_multi_valued` is decided here, from the
/// method shapes and the matched setter prefix, never re-derived per call.
#[derive(Clone, Copy)]
pub struct AccessorPair<'c> {
    class_name: &'c str,
    getter: &'c dyn MethodMetadata,
    setter: &'c dyn MethodMetadata,
    multi_valued: bool,
}

impl<'c> AccessorPair<'c> {
    /// Construct a pair. `aggregating` marks a setter matched through an
    /// aggregating prefix such as `add` (one element in, whole collection
    /// out of the getter).
    pub fn new(
        class_name: &'c str,
        getter: &'c dyn MethodMetadata,
        setter: &'c dyn MethodMetadata,
        aggregating: bool,
    ) -> Self {
        let variadic = setter
            .parameters()
            .first()
            .is_some_and(|parameter| parameter.is_variadic);
        Self {
            class_name,
            getter,
            setter,
            multi_valued: aggregating || variadic,
        }
    }

    pub fn class_name(&self) -> &'c str {
        self.class_name
    }

    pub fn getter(&self) -> &'c dyn MethodMetadata {
        self.getter
    }

    pub fn setter(&self) -> &'c dyn MethodMetadata {
        self.setter
    }

    /// True when the setter adds one element to a collection the getter
    /// returns as a whole.
    pub fn is_multi_valued(&self) -> bool {
        self.multi_valued
    }

    /// Serializable snapshot for downstream reporting.
    pub fn descriptor(&self) -> PairDescriptor {
        PairDescriptor {
            class: self.class_name.to_string(),
            getter: self.getter.name().to_string(),
            setter: self.setter.name().to_string(),
            multi_valued: self.multi_valued,
        }
    }
}

impl fmt::Debug for AccessorPair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorPair")
            .field("class", &self.class_name)
            .field("getter", &self.getter.name())
            .field("setter", &self.setter.name())
            .field("multi_valued", &self.multi_valued)
            .finish()
    }
}

/// Owned description of a validated pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairDescriptor {
    pub class: String,
    pub getter: String,
    pub setter: String,
    pub multi_valued: bool,
}
