/* Construct-from-builder binding on the sequence value type */

use crate::schema::resolved::ResolvedKind;

pub fn emit_binding(resolved: &ResolvedKind) -> String {
  let mut output = String::new();
  output.push_str(&format!("impl {} {{\n", resolved.name));
  output.push_str(&format!(
    "    /// Builds a `{}` by evaluating `items` as one builder block.\n",
    resolved.name
  ));
  output.push_str(&format!(
    "    pub fn from_builder(items: impl FnOnce(&mut {}::Builder)) -> Self {{\n",
    resolved.module_name
  ));
  output.push_str(&format!("        {}::Builder::evaluate(items)\n", resolved.module_name));
  output.push_str("    }\n");
  output.push_str("}\n");
  output
}
