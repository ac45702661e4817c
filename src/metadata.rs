//! Pluggable class-metadata capability.
//!
//! The discovery and validation pipeline never talks to a concrete
//! reflection API. It depends on the `ClassMetadata`/`MethodMetadata` traits
//! below, so it can be retargeted to whatever introspection facility the
//! host environment provides. `ClassModel`/`MethodModel` is the in-memory
//! implementation used by hosts that build metadata by hand and by this
//! crate's own tests.

use serde::{Deserialize, Serialize};

/// Visibility of a method as reported by the host introspection facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// Shape of one declared method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    /// Native type declaration text, if any (e.g. `string`, `?Foo`).
    pub type_declaration: Option<String>,

    /// Supplementary documentation-based type annotation, if any.
    /// More specific than the native declaration when both are present.
    pub type_annotation: Option<String>,

    pub is_variadic: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_declaration: None,
            type_annotation: None,
            is_variadic: false,
        }
    }
}

/// One method of a class, as seen through the host's introspection facility.
pub trait MethodMetadata: Sync {
    fn name(&self) -> &str;
    fn visibility(&self) -> Visibility;

    /// Parameters in declaration order.
    fn parameters(&self) -> &[Parameter];

    /// Native return type declaration text, if any.
    fn return_declaration(&self) -> Option<&str>;

    /// Documentation-based return type annotation, if any.
    fn return_annotation(&self) -> Option<&str>;

    fn is_public(&self) -> bool {
        self.visibility() == Visibility::Public
    }

    fn parameter_count(&self) -> usize {
        self.parameters().len()
    }
}

/// A class definition, as seen through the host's introspection facility.
pub trait ClassMetadata: Sync {
    fn name(&self) -> &str;

    /// All methods in declaration order, regardless of visibility.
    fn methods(&self) -> Vec<&dyn MethodMetadata>;

    /// Look up a method by exact name.
    fn find_method(&self, name: &str) -> Option<&dyn MethodMetadata>;
}

/// In-memory method metadata with a fluent construction API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodModel {
    name: String,
    visibility: Visibility,
    parameters: Vec<Parameter>,
    return_declaration: Option<String>,
    return_annotation: Option<String>,
}

impl MethodModel {
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
            parameters: Vec::new(),
            return_declaration: None,
            return_annotation: None,
        }
    }

    pub fn public(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Public)
    }

    pub fn protected(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Protected)
    }

    pub fn private(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Private)
    }

    /// Append a parameter with a native type declaration.
    pub fn param(mut self, name: impl Into<String>, type_text: impl Into<String>) -> Self {
        let mut parameter = Parameter::new(name);
        parameter.type_declaration = Some(type_text.into());
        self.parameters.push(parameter);
        self
    }

    /// Append a parameter with no type information at all.
    pub fn untyped_param(mut self, name: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(name));
        self
    }

    /// Append a variadic parameter with a native element type declaration.
    pub fn variadic_param(mut self, name: impl Into<String>, type_text: impl Into<String>) -> Self {
        let mut parameter = Parameter::new(name);
        parameter.type_declaration = Some(type_text.into());
        parameter.is_variadic = true;
        self.parameters.push(parameter);
        self
    }

    /// Attach a documentation-based annotation to the last appended parameter.
    pub fn annotate_last_param(mut self, annotation: impl Into<String>) -> Self {
        if let Some(parameter) = self.parameters.last_mut() {
            parameter.type_annotation = Some(annotation.into());
        }
        self
    }

    /// Set the native return type declaration.
    pub fn returns(mut self, type_text: impl Into<String>) -> Self {
        self.return_declaration = Some(type_text.into());
        self
    }

    /// Set the documentation-based return type annotation.
    pub fn annotated_return(mut self, annotation: impl Into<String>) -> Self {
        self.return_annotation = Some(annotation.into());
        self
    }
}

impl MethodMetadata for MethodModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    fn return_declaration(&self) -> Option<&str> {
        self.return_declaration.as_deref()
    }

    fn return_annotation(&self) -> Option<&str> {
        self.return_annotation.as_deref()
    }
}

/// In-memory class metadata holding methods in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ClassModel {
    name: String,
    methods: Vec<MethodModel>,
}

impl ClassModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    pub fn method(mut self, method: MethodModel) -> Self {
        self.methods.push(method);
        self
    }
}

impl ClassMetadata for ClassModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn methods(&self) -> Vec<&dyn MethodMetadata> {
        self.methods
            .iter()
            .map(|method| method as &dyn MethodMetadata)
            .collect()
    }

    fn find_method(&self, name: &str) -> Option<&dyn MethodMetadata> {
        self.methods
            .iter()
            .find(|method| method.name == name)
            .map(|method| method as &dyn MethodMetadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_model_fluent_construction() {
        let method = MethodModel::public("setTags")
            .variadic_param("tags", "string")
            .returns("void");

        assert_eq!(method.name(), "setTags");
        assert!(method.is_public());
        assert_eq!(method.parameter_count(), 1);
        assert!(method.parameters()[0].is_variadic);
        assert_eq!(method.return_declaration(), Some("void"));
        assert_eq!(method.return_annotation(), None);
    }

    #[test]
    fn test_annotation_attaches_to_last_parameter() {
        let method = MethodModel::public("setItems")
            .param("items", "array")
            .annotate_last_param("string[]");

        assert_eq!(
            method.parameters()[0].type_annotation.as_deref(),
            Some("string[]")
        );
    }

    #[test]
    fn test_class_model_preserves_declaration_order() {
        let class = ClassModel::new("Order")
            .method(MethodModel::public("getId").returns("int"))
            .method(MethodModel::public("setId").param("id", "int"))
            .method(MethodModel::private("recalculate"));

        let names: Vec<&str> = class.methods().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["getId", "setId", "recalculate"]);
    }

    #[test]
    fn test_class_model_method_lookup() {
        let class = ClassModel::new("Order")
            .method(MethodModel::public("getId").returns("int"))
            .method(MethodModel::protected("setId").param("id", "int"));

        assert!(class.find_method("getId").is_some());
        assert!(!class.find_method("setId").unwrap().is_public());
        assert!(class.find_method("addId").is_none());
    }
}
