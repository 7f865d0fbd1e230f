/* Codegen command - generate builder code from kind catalogs */

use super::common::load_and_resolve_kinds;
use seq_gen::codegen::generate_source;
use seq_gen::codegen::rust::{RustCodeGenerator, RustCodeGeneratorOptions};
use std::path::PathBuf;

/* Execute the codegen command */
pub fn run(
  files: Vec<PathBuf>,
  include_dirs: Vec<PathBuf>,
  options: RustCodeGeneratorOptions,
  verbose: bool,
) -> anyhow::Result<()> {
  if verbose {
    println!("Sequence Builder Generator - Code Generation Tool");
    println!("================================================\n");
    println!("[~] Configuration:");
    println!("  Output: {}", options.output_dir.join(&options.file_name).display());
    println!("  Runtime crate: {}", options.runtime_crate);
    println!("  Bindings: {}", if options.emit_bindings { "enabled" } else { "disabled" });
    println!("  Input files: {}", files.len());
    for file in &files {
      println!("    - {}", file.display());
    }
    println!();
  }

  let (catalog, _, kind_resolver) = load_and_resolve_kinds(&files, &include_dirs, verbose, false)?;

  if verbose {
    println!("\n[*] Starting code generation...");
  }

  let code = generate_source(&catalog, options.clone())?;
  let path = RustCodeGenerator::new(options).write_code(&code)?;

  println!("[✓] Generated {} builder(s) in {}", kind_resolver.resolved_kinds().len(), path.display());

  Ok(())
}
