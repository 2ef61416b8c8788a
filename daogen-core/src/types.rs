//! Type hints and member visibility for generated classes.

use std::fmt;

/// A type hint attached to a parameter or return value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeHint {
    /// A named type (scalar or class name).
    Named(String),
    /// A nullable type.
    Nullable(Box<TypeHint>),
    /// A homogeneous list of another type.
    Array(Box<TypeHint>),
    /// No return value.
    Void,
}

impl TypeHint {
    /// Create a named type hint.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create a nullable type hint.
    pub fn nullable(inner: TypeHint) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// Create an array type hint.
    pub fn array(inner: TypeHint) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Check if this hint accepts null.
    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeHint::Named(name) => write!(f, "{}", name),
            TypeHint::Nullable(inner) => write!(f, "?{}", inner),
            TypeHint::Array(inner) => write!(f, "{}[]", inner),
            TypeHint::Void => write!(f, "void"),
        }
    }
}

/// Visibility of a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// Check if this is a public visibility.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }

    /// Check if this is a private visibility.
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::Private => write!(f, "private"),
        }
    }
}
