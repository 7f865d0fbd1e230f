pub mod resolved;
pub mod types;
pub mod validate;

use crate::schema::resolved::KindResolver;
use crate::schema::types::KindCatalog;
use crate::schema::validate::SchemaDefects;
use seq_loader::ImportResolver;
use std::path::PathBuf;

/* Load catalog files (imports first) and merge them into one catalog */
pub fn load_catalog(files: &[PathBuf], include_dirs: &[PathBuf]) -> anyhow::Result<(KindCatalog, ImportResolver)> {
  let mut resolver = ImportResolver::new(include_dirs.to_vec());
  for file in files {
    resolver.load_file_with_imports(file)?;
  }
  Ok((resolver.to_catalog(), resolver))
}

/* Validate and resolve every kind of a catalog */
pub fn resolve_catalog(catalog: &KindCatalog) -> Result<KindResolver, SchemaDefects> {
  let mut resolver = KindResolver::new();
  for kind in &catalog.kinds {
    resolver.add_kind(kind.clone());
  }
  resolver.resolve_all()?;
  Ok(resolver)
}
