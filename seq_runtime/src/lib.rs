//! Sequence Builder Runtime
//!
//! The accumulation algebra shared by every generated sequence builder.
//! A generated builder module names a `SequenceKind` and delegates its
//! `build_*` functions to [`algebra`]; callers who prefer plain control flow
//! use [`SequenceBuilder`] directly.

pub mod algebra;
pub mod builder;
pub mod component;
pub mod kind;

pub use builder::SequenceBuilder;
pub use component::Component;
pub use kind::{AssemblyPolicy, SequenceKind, SequenceValue, TrailingSeparator};
