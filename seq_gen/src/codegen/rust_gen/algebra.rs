/* Accumulation algebra emission: the `build_*` functions over `Component` */

use super::coercion::emit_coercion_lifts;
use crate::schema::resolved::ResolvedKind;

/* Emit one delegating function: doc line, signature, call into the runtime algebra */
fn emit_algebra_fn(output: &mut String, doc: &str, signature: &str, body: &str) {
  output.push_str("\n");
  output.push_str(&format!("    /// {}\n", doc));
  output.push_str(&format!("    pub fn {} {{\n", signature));
  output.push_str(&format!("        {}\n", body));
  output.push_str("    }\n");
}

pub fn emit_algebra(resolved: &ResolvedKind, runtime_crate: &str) -> String {
  let mut output = String::new();
  let algebra = format!("{}::algebra", runtime_crate);

  emit_algebra_fn(
    &mut output,
    "Combines the partial results of a statement block, in order.",
    "build_block<I: IntoIterator<Item = Component>>(components: I) -> Component",
    &format!("{}::build_block(components)", algebra),
  );

  emit_algebra_fn(
    &mut output,
    "Lifts a statement expression into a partial result.",
    "build_expression(expression: Expression) -> Component",
    &format!("{}::build_expression(expression)", algebra),
  );

  output.push_str(&emit_coercion_lifts(resolved));

  emit_algebra_fn(
    &mut output,
    &format!("Splices the elements of an existing `{}`, in order.", resolved.name),
    "build_splice(expression: FinalResult) -> Component",
    &format!("{}::build_splice::<Kind>(expression)", algebra),
  );

  emit_algebra_fn(
    &mut output,
    "Enables `if` statements that have no `else`.",
    "build_optional(component: Option<Component>) -> Component",
    &format!("{}::build_optional(component)", algebra),
  );

  emit_algebra_fn(
    &mut output,
    "With `build_either_second`, folds the arms of an `if`/`else` or `match`.",
    "build_either_first(component: Component) -> Component",
    &format!("{}::build_either_first(component)", algebra),
  );

  emit_algebra_fn(
    &mut output,
    "With `build_either_first`, folds the arms of an `if`/`else` or `match`.",
    "build_either_second(component: Component) -> Component",
    &format!("{}::build_either_second(component)", algebra),
  );

  emit_algebra_fn(
    &mut output,
    "Combines the results of all loop iterations, in order.",
    "build_array<I: IntoIterator<Item = Component>>(components: I) -> Component",
    &format!("{}::build_array(components)", algebra),
  );

  emit_algebra_fn(
    &mut output,
    "Partial result of an availability-guarded block.",
    "build_limited_availability(component: Component) -> Component",
    &format!("{}::build_limited_availability(component)", algebra),
  );

  output
}
