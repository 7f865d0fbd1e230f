/* Expression type and coercion lift emission */

use super::helpers::nested_type_path;
use crate::schema::resolved::ResolvedKind;

/* `pub type Expression = ...;` for the builder module */
pub fn emit_expression_alias(resolved: &ResolvedKind, runtime_crate: &str) -> String {
  let mut output = String::new();
  output.push_str("    /// The type of individual statement expressions in a builder block.\n");
  output.push_str(&format!("    pub type Expression = {};\n", resolved.expression.to_rust(runtime_crate)));
  output
}

/* One lift function per registered coercion, in declaration order */
pub fn emit_coercion_lifts(resolved: &ResolvedKind) -> String {
  let mut output = String::new();
  for coercion in &resolved.coercions {
    output.push_str("\n");
    output.push_str(&format!(
      "    /// Lifts a `{}` through its conversion into `Expression`.\n",
      coercion.source_type
    ));
    output.push_str(&format!(
      "    pub fn {}(expression: {}) -> Component {{\n",
      coercion.lift_fn,
      nested_type_path(&coercion.source_type)
    ));
    output.push_str("        build_expression(expression.into())\n");
    output.push_str("    }\n");
  }
  output
}
