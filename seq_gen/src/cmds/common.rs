/* Common utilities shared between analyze and codegen commands */

use seq_gen::schema::resolved::KindResolver;
use seq_gen::schema::types::KindCatalog;
use seq_gen::schema::validate::SchemaDefects;
use seq_gen::schema::{load_catalog, resolve_catalog};
use seq_loader::ImportResolver;
use std::path::PathBuf;

/* Load catalogs with their imports, then validate and resolve every kind.
   With `structured` set, defects go to stderr so stdout stays a pure report */
pub fn load_and_resolve_kinds(
  files: &[PathBuf],
  include_dirs: &[PathBuf],
  verbose: bool,
  structured: bool,
) -> anyhow::Result<(KindCatalog, ImportResolver, KindResolver)> {
  if verbose {
    println!("[~] Loading catalog files and resolving imports...");
    if !include_dirs.is_empty() {
      println!("    Include directories:");
      for dir in include_dirs {
        println!("      - {}", dir.display());
      }
    }
    println!();
  }

  let (catalog, import_resolver) = load_catalog(files, include_dirs)?;

  if verbose {
    println!("[~] Loaded {} file(s) total (including imports)", import_resolver.loaded_file_count());
    println!("[~] Packages loaded:");
    for package in import_resolver.get_packages() {
      println!("    - {}", package);
    }
    println!("[~] Loaded {} kind definitions", catalog.kinds.len());
    for kind in &catalog.kinds {
      println!("  - {}", kind.name);
    }
    println!();
  }

  let kind_resolver = match resolve_catalog(&catalog) {
    Ok(kind_resolver) => kind_resolver,
    Err(defects) => {
      for line in defect_report(&defects) {
        if structured {
          eprintln!("{}", line);
        } else {
          println!("{}", line);
        }
      }
      anyhow::bail!("Schema validation failed. Cannot proceed.");
    }
  };

  if verbose {
    println!("[✓] Schema validation successful");
    println!("[✓] Resolved {} kind(s)", kind_resolver.resolved_kinds().len());
  }

  Ok((catalog, import_resolver, kind_resolver))
}

/* Console lines describing every defect */
pub fn defect_report(defects: &SchemaDefects) -> Vec<String> {
  let mut lines = vec![format!("[✗] {} schema defect(s):", defects.0.len())];
  for defect in &defects.0 {
    lines.push(format!("  [!] ({}): {}", defect.error_type(), defect));
  }
  lines
}
