//! Kind Catalog Definitions
//!
//! This crate contains the data structures describing collection node kinds:
//! the element type of each sequence, the alternate source types accepted at
//! an element position, and the formatting traits that drive final assembly.
//! It performs no file I/O and no code generation.

pub mod kinds;

// Re-export commonly used types at the crate root
pub use kinds::*;
