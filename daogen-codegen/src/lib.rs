//! Listener dispatch for the daogen bean/DAO generator.
//!
//! The generator walks a fixed sequence of [`Stage`]s. At each one it has a
//! candidate artifact (a file, a method, or a group of accessor methods) and
//! hands it to a [`CodeGeneratorListener`]. Listeners may keep, rewrite or
//! veto what they are given.
//!
//! [`EventDispatcher`] is itself a listener: it threads each artifact through
//! an ordered list of listeners and stops as soon as every slot has been
//! vetoed.
//!
//! # Module Organization
//!
//! - [`stage`] - Stage identifiers and their slot shapes
//! - [`slots`] - Multi-method slot groups (`PropertyAccessors`, `ManyToManyAccessors`)
//! - [`listener`] - The stage contract
//! - [`dispatcher`] - Ordered fan-out with veto short-circuit
//! - [`testing`] - Scriptable listeners for tests (feature-gated)

pub mod dispatcher;
pub mod listener;
pub mod slots;
pub mod stage;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use dispatcher::EventDispatcher;
pub use listener::CodeGeneratorListener;
pub use slots::{ManyToManyAccessors, PropertyAccessors, SlotGroup};
pub use stage::{Stage, StageFamily};
