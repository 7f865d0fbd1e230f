pub mod algebra;
pub mod assembly;
pub mod binding;
pub mod coercion;
pub mod helpers;

/* Re-export main public functions */
pub use algebra::emit_algebra;
pub use assembly::{emit_final_result_fn, emit_kind_impl};
pub use binding::emit_binding;
pub use coercion::{emit_coercion_lifts, emit_expression_alias};

use crate::schema::resolved::ResolvedKind;
use helpers::emit_doc_comment;

/* Everything emitted for one kind: the builder module, then the binding */
pub fn emit_builder(resolved: &ResolvedKind, runtime_crate: &str, with_binding: bool) -> String {
  let mut output = String::new();

  output.push_str(&format!("/// Result builder for [`{}`].\n", resolved.name));
  if let Some(comment) = &resolved.comment {
    output.push_str("///\n");
    output.push_str(&emit_doc_comment(comment, 0));
  }
  output.push_str(&format!("pub mod {} {{\n", resolved.module_name));
  output.push_str("    #[allow(unused_imports)]\n");
  output.push_str("    use super::*;\n\n");

  output.push_str(&emit_expression_alias(resolved, runtime_crate));
  output.push_str("\n");
  output.push_str("    /// The type of a partial result, carried through every build function.\n");
  output.push_str(&format!("    pub type Component = {}::Component<Expression>;\n\n", runtime_crate));
  output.push_str("    /// The completed sequence value produced from the outermost block.\n");
  output.push_str(&format!("    pub type FinalResult = {};\n\n", resolved.name));
  output.push_str("    /// Scoped builder object for writing blocks with plain control flow.\n");
  output.push_str(&format!("    pub type Builder = {}::SequenceBuilder<Kind>;\n\n", runtime_crate));

  output.push_str(&emit_kind_impl(resolved, runtime_crate));
  output.push_str(&emit_algebra(resolved, runtime_crate));
  output.push_str(&emit_final_result_fn(resolved, runtime_crate));
  output.push_str("}\n");

  if with_binding {
    output.push_str("\n");
    output.push_str(&emit_binding(resolved));
  }

  output
}
