//! The class a generator is currently assembling.

use super::method::MethodSpec;

/// A class under construction.
///
/// Passed to listeners as read-only context so they can see which methods
/// have already been accepted into the class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSpec {
    /// Unqualified class name.
    pub name: String,
    /// Parent class, if any.
    pub extends: Option<String>,
    /// Implemented interfaces.
    pub implements: Vec<String>,
    /// Whether the class is abstract.
    pub is_abstract: bool,
    /// Doc block text.
    pub doc: Option<String>,
    /// Methods accepted so far, in insertion order.
    pub methods: Vec<MethodSpec>,
}

impl ClassSpec {
    /// Create a new concrete class.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            implements: Vec::new(),
            is_abstract: false,
            doc: None,
            methods: Vec::new(),
        }
    }

    /// Set the parent class.
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    /// Add an implemented interface.
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.implements.push(interface.into());
        self
    }

    /// Mark the class abstract.
    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Set the doc block.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a method.
    pub fn method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    /// Append a method in place.
    pub fn add_method(&mut self, method: MethodSpec) {
        self.methods.push(method);
    }

    /// Check if a method with this name has been added.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.name == name)
    }

    /// Look up a method by name.
    pub fn find_method(&self, name: &str) -> Option<&MethodSpec> {
        self.methods.iter().find(|m| m.name == name)
    }
}
