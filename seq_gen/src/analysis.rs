/* Resolved-kind reports for the analyze command */

use crate::codegen::rust_gen::emit_builder;
use crate::schema::resolved::{ExpressionType, KindResolver, ResolvedKind};
use anyhow::{Context, anyhow};
use clap::ValueEnum;
use seq_loader::ImportResolver;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum AnalysisFormat {
  Text,
  Json,
  Yaml,
}

impl AnalysisFormat {
  /* JSON and YAML reports must be the only thing on stdout */
  pub fn is_structured(&self) -> bool {
    !matches!(self, AnalysisFormat::Text)
  }
}

pub fn render_report(
  format: AnalysisFormat,
  resolved_kinds: &[&ResolvedKind],
  import_resolver: &ImportResolver,
) -> anyhow::Result<String> {
  match format {
    AnalysisFormat::Text => Ok(render_text(resolved_kinds, import_resolver)),
    AnalysisFormat::Json => {
      let mut json = serde_json::to_string_pretty(&resolved_kinds).context("Failed to serialize kinds as JSON")?;
      json.push('\n');
      Ok(json)
    }
    AnalysisFormat::Yaml => serde_yml::to_string(&resolved_kinds).context("Failed to serialize kinds as YAML"),
  }
}

pub fn render_text(resolved_kinds: &[&ResolvedKind], import_resolver: &ImportResolver) -> String {
  let mut output = String::new();

  output.push_str("[~] Catalog Files:\n");
  output.push_str("==================\n");
  for file in import_resolver.get_all_files() {
    match file.description() {
      Some(description) => output.push_str(&format!("  - {}: {}\n", file.package(), description)),
      None => output.push_str(&format!("  - {}\n", file.package())),
    }
  }

  output.push_str("\n[~] Resolved Kind Information:\n");
  output.push_str("==============================\n");

  for resolved in resolved_kinds {
    output.push_str(&format!("\n[*] Kind: {}\n", resolved.name));
    if let Some(package) = import_resolver.get_package_for_kind(&resolved.name) {
      output.push_str(&format!("   Package: {}\n", package));
    }
    output.push_str(&format!("   Module: {}\n", resolved.module_name));
    output.push_str(&format!("   Element: {}\n", resolved.element_type));
    match &resolved.expression {
      ExpressionType::Element { type_name } => output.push_str(&format!("   Expression: {}\n", type_name)),
      ExpressionType::UnifiedElement { sequence_type } => {
        output.push_str(&format!("   Expression: unified element of {}\n", sequence_type))
      }
    }
    output.push_str(&format!("   Policy: {}\n", resolved.policy.as_str()));
    if resolved.coercions.is_empty() {
      output.push_str("   Coercions: none\n");
    } else {
      output.push_str("   Coercions:\n");
      for coercion in &resolved.coercions {
        output.push_str(&format!("     {} -> {}\n", coercion.source_type, coercion.lift_fn));
      }
    }
  }

  output
}

/* Generated source for one kind, bindings included */
pub fn builder_preview(kind_resolver: &KindResolver, kind_name: &str, runtime_crate: &str) -> anyhow::Result<String> {
  let resolved = kind_resolver
    .get_kind_info(kind_name)
    .ok_or_else(|| anyhow!("Kind '{}' not found", kind_name))?;
  Ok(emit_builder(resolved, runtime_crate, true))
}
