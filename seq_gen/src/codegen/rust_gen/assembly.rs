/* Final assembly emission: the kind's policy and `build_final_result` */

use crate::schema::resolved::ResolvedKind;
use seq_runtime::AssemblyPolicy;

fn policy_variant(policy: AssemblyPolicy) -> &'static str {
  match policy {
    AssemblyPolicy::Atomic => "Atomic",
    AssemblyPolicy::TrailingSeparator => "TrailingSeparator",
    AssemblyPolicy::Verbatim => "Verbatim",
  }
}

/* `impl SequenceKind for Kind`, binding the aliases and the assembly policy */
pub fn emit_kind_impl(resolved: &ResolvedKind, runtime_crate: &str) -> String {
  let mut output = String::new();

  output.push_str(&format!("    /// Binds the builder algebra to [`{}`].\n", resolved.name));
  output.push_str("    pub enum Kind {}\n\n");
  output.push_str(&format!("    impl {}::SequenceKind for Kind {{\n", runtime_crate));
  output.push_str("        type Expression = Expression;\n");
  output.push_str("        type FinalResult = FinalResult;\n");
  output.push_str(&format!(
    "        const POLICY: {rt}::AssemblyPolicy = {rt}::AssemblyPolicy::{};\n",
    policy_variant(resolved.policy),
    rt = runtime_crate
  ));

  if resolved.policy == AssemblyPolicy::TrailingSeparator {
    output.push_str("\n");
    output.push_str("        fn ensure_trailing_separator(expression: Expression) -> Expression {\n");
    output.push_str(&format!(
      "            {}::TrailingSeparator::ensuring_trailing_separator(expression)\n",
      runtime_crate
    ));
    output.push_str("        }\n");
  }

  output.push_str("    }\n");
  output
}

/* Terminal transform from the outermost partial result to the sequence value */
pub fn emit_final_result_fn(resolved: &ResolvedKind, runtime_crate: &str) -> String {
  let mut output = String::new();
  let note = match resolved.policy {
    AssemblyPolicy::TrailingSeparator => "every element but the last gets a trailing separator.",
    AssemblyPolicy::Atomic | AssemblyPolicy::Verbatim => "elements are taken as they are.",
  };

  output.push_str("\n");
  output.push_str(&format!("    /// Produces the final `{}` from the outermost block;\n", resolved.name));
  output.push_str(&format!("    /// {}\n", note));
  output.push_str("    pub fn build_final_result(component: Component) -> FinalResult {\n");
  output.push_str(&format!("        {}::algebra::build_final_result::<Kind>(component)\n", runtime_crate));
  output.push_str("    }\n");
  output
}
