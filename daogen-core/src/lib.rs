//! Core artifact types for the daogen bean/DAO generator.
//!
//! Artifacts are the values that flow through the listener chain: whole
//! generated files, single methods, and the class a method is being added to.
//! They are plain owned values; listeners replace them rather than mutating
//! shared state.

mod class;
mod file;
mod method;
mod types;
mod utils;

pub use class::ClassSpec;
pub use file::FileArtifact;
pub use method::{MethodSpec, ParamSpec};
pub use types::{TypeHint, Visibility};
// String utilities
pub use utils::{getter_name, setter_name, to_camel_case, to_pascal_case, to_snake_case};
