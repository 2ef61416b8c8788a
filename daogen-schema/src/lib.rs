//! Read-only context handed to generation listeners.
//!
//! Descriptors are produced by schema introspection upstream; this crate only
//! models them. [`Configuration`] is the one piece loaded from disk.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod bean;
mod config;
mod error;
mod index;
mod property;
mod relation;

pub use bean::BeanDescriptor;
pub use config::Configuration;
pub use error::{Error, Result};
pub use index::Index;
pub use property::{PropertyDescriptor, PropertyKind};
pub use relation::{DirectForeignKeyMethodDescriptor, ForeignKey, PivotTableMethodsDescriptor};

/// Singular form of a table name (e.g., "users" -> "user", "categories" -> "category")
pub(crate) fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        format!("{}y", stem)
    } else if word.ends_with("ss") {
        word.to_string()
    } else if let Some(stem) = word.strip_suffix('s') {
        stem.to_string()
    } else {
        word.to_string()
    }
}
