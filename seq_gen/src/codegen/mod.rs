pub mod rust;
pub mod rust_gen;

use crate::codegen::rust::{RustCodeGenerator, RustCodeGeneratorOptions};
use crate::schema::resolve_catalog;
use crate::schema::types::KindCatalog;
use seq_loader::catalog_digest;

pub const OUTPUT_DIR: &str = "generated";
pub const OUTPUT_FILE: &str = "builders.rs";
pub const RUNTIME_CRATE: &str = "seq_runtime";

/* Catalog `uses` first, then extras not already present */
pub fn merged_uses(catalog: &KindCatalog, extra: &[String]) -> Vec<String> {
  let mut uses = catalog.uses.clone();
  for use_path in extra {
    if !uses.contains(use_path) {
      uses.push(use_path.clone());
    }
  }
  uses
}

/* Validate, resolve and render a catalog into one generated unit */
pub fn generate_source(catalog: &KindCatalog, mut options: RustCodeGeneratorOptions) -> anyhow::Result<String> {
  let resolver = resolve_catalog(catalog)?;
  let digest = catalog_digest(catalog)?;
  options.uses = merged_uses(catalog, &options.uses);
  let generator = RustCodeGenerator::new(options);
  Ok(generator.emit_code(&resolver.resolved_kinds(), &digest))
}
