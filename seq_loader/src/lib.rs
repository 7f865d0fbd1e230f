//! Kind Catalog Loading and Import Resolution
//!
//! This crate loads kind catalog files from disk, resolves path imports
//! between them, and merges the result into one ordered `KindCatalog`
//! ready for code generation.

pub mod digest;
pub mod file;
pub mod resolver;

// Re-export commonly used types at the crate root
pub use digest::catalog_digest;
pub use file::{CatalogFile, CatalogMetadata, ImportSource};
pub use resolver::ImportResolver;

// Re-export seq_types for convenience
pub use seq_types;
