use crate::codegen::rust_gen::emit_builder;
use crate::schema::resolved::ResolvedKind;
use anyhow::Context;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

pub struct RustCodeGenerator {
  options: RustCodeGeneratorOptions,
}

#[derive(Debug, Clone)]
pub struct RustCodeGeneratorOptions {
  pub output_dir: PathBuf,
  pub file_name: String,
  /* Path under which generated code reaches the builder runtime */
  pub runtime_crate: String,
  /* Emit `from_builder` on each sequence type */
  pub emit_bindings: bool,
  /* `use` lines placed after the header */
  pub uses: Vec<String>,
}

impl Default for RustCodeGeneratorOptions {
  fn default() -> Self {
    Self {
      output_dir: PathBuf::from(super::OUTPUT_DIR),
      file_name: super::OUTPUT_FILE.to_string(),
      runtime_crate: super::RUNTIME_CRATE.to_string(),
      emit_bindings: true,
      uses: Vec::new(),
    }
  }
}

impl RustCodeGenerator {
  pub fn new(options: RustCodeGeneratorOptions) -> Self {
    Self { options }
  }

  /* Render the whole generated unit. Output depends only on the inputs */
  pub fn emit_code(&self, resolved_kinds: &[&ResolvedKind], catalog_digest: &str) -> String {
    let mut output = String::new();

    output.push_str("// @generated by seq-gen. Do not edit.\n");
    output.push_str(&format!("// Catalog digest: sha256:{}\n", catalog_digest));
    output.push_str(&format!("// Kinds: {}\n", resolved_kinds.len()));

    if !self.options.uses.is_empty() {
      output.push_str("\n");
      for use_path in &self.options.uses {
        output.push_str(&format!("use {};\n", use_path));
      }
    }

    for resolved in resolved_kinds {
      debug!(kind = %resolved.name, "emitting builder");
      output.push_str("\n");
      output.push_str(&emit_builder(resolved, &self.options.runtime_crate, self.options.emit_bindings));
    }

    output
  }

  pub fn output_path(&self) -> PathBuf {
    self.options.output_dir.join(&self.options.file_name)
  }

  /* Write the generated unit, creating the output directory if needed */
  pub fn write_code(&self, code: &str) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(&self.options.output_dir)
      .with_context(|| format!("Failed to create output directory {}", self.options.output_dir.display()))?;

    let path = self.output_path();
    fs::write(&path, code).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = code.len(), "wrote generated builders");
    Ok(path)
  }
}
