pub mod analysis;
pub mod codegen;
pub mod schema;
