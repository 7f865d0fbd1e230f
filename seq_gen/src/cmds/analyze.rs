/* Analyze command - resolved builder surface reporting */

use super::common::load_and_resolve_kinds;
use seq_gen::analysis::{AnalysisFormat, builder_preview, render_report};
use seq_gen::codegen::RUNTIME_CRATE;
use std::path::PathBuf;

/* Reject option combinations that would mix Rust source into a structured report */
fn check_options(format: AnalysisFormat, print_builder: Option<&str>) -> anyhow::Result<()> {
  if format.is_structured() && print_builder.is_some() {
    anyhow::bail!("--print-builder is only available with --format text");
  }
  Ok(())
}

/* Execute the analyze command */
pub fn run(
  files: Vec<PathBuf>,
  include_dirs: Vec<PathBuf>,
  format: AnalysisFormat,
  print_builder: Option<String>,
) -> anyhow::Result<()> {
  check_options(format, print_builder.as_deref())?;

  let structured = format.is_structured();
  if !structured {
    println!("Sequence Builder Generator - Kind Analysis Tool");
    println!("===============================================\n");
  }

  let (_, import_resolver, kind_resolver) = load_and_resolve_kinds(&files, &include_dirs, !structured, structured)?;

  let report = render_report(format, &kind_resolver.resolved_kinds(), &import_resolver)?;
  if !structured {
    println!();
  }
  print!("{}", report);

  if let Some(kind_name) = print_builder.as_deref() {
    let preview = builder_preview(&kind_resolver, kind_name, RUNTIME_CRATE)?;
    println!("\n[~] Generated builder for {}", kind_name);
    println!("==========================================");
    print!("{}", preview);
  }

  Ok(())
}
