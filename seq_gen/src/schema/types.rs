// Re-export from seq_types for use across the generator
pub use seq_types::{KindCatalog, KindDescriptor};
