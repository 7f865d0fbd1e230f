/* Helper utilities for Rust code generation */

/* Rust reserved keywords; none of them may name a kind or a type segment */
const RUST_KEYWORDS: &[&str] = &[
  "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
  "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
  "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use", "where",
  "while", "async", "await", "dyn", "abstract", "become", "box", "do", "final", "macro",
  "override", "priv", "typeof", "unsized", "virtual", "yield", "try", "gen",
];

/* Leading path segments that are keywords but still valid in a path */
const PATH_ROOTS: &[&str] = &["crate", "self", "super"];

/* Names the generated builder module defines for itself */
pub const RESERVED_NAMES: &[&str] = &["Builder", "Component", "Expression", "FinalResult", "Kind"];

/* Check that `name` is a plain, non-keyword Rust identifier */
pub fn is_rust_identifier(name: &str) -> bool {
  let mut chars = name.chars();
  let Some(first) = chars.next() else {
    return false;
  };
  if !(first.is_ascii_alphabetic() || first == '_') {
    return false;
  }
  if name == "_" {
    return false;
  }
  chars.all(|c| c.is_ascii_alphanumeric() || c == '_') && !RUST_KEYWORDS.contains(&name)
}

/* Check that `path` is a `::`-separated path of identifiers, e.g. `crate::syntax::Stmt` */
pub fn is_type_path(path: &str) -> bool {
  let segments: Vec<&str> = path.split("::").collect();
  let last = segments.len() - 1;
  let is_root = |index: usize, segment: &str| match index {
    0 => PATH_ROOTS.contains(&segment),
    _ => segment == "super" && matches!(segments[index - 1], "self" | "super"),
  };
  segments
    .iter()
    .enumerate()
    .all(|(index, segment)| is_rust_identifier(segment) || (index < last && is_root(index, segment)))
}

/* Spelling of a catalog type path from inside a generated builder module.
   Catalog paths are relative to the module that includes the generated
   unit, one level above the builder module */
pub fn nested_type_path(path: &str) -> String {
  match path.split_once("::") {
    Some(("self", rest)) => format!("super::{}", rest),
    Some(("super", _)) => format!("super::{}", path),
    _ => path.to_string(),
  }
}

/* Final segment of a type path */
pub fn last_segment(path: &str) -> &str {
  path.rsplit("::").next().unwrap_or(path)
}

/* True when an unqualified name would be shadowed by a generated alias */
pub fn is_reserved_name(path: &str) -> bool {
  !path.contains("::") && RESERVED_NAMES.contains(&path)
}

/* Convert a CamelCase type name to snake_case ("IfConfigDecl" -> "if_config_decl") */
pub fn to_snake_case(name: &str) -> String {
  let chars: Vec<char> = name.chars().collect();
  let mut output = String::with_capacity(name.len() + 4);

  for (i, &c) in chars.iter().enumerate() {
    if c.is_ascii_uppercase() {
      if i > 0 {
        let prev = chars[i - 1];
        let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
        let boundary = prev.is_ascii_lowercase()
          || prev.is_ascii_digit()
          || (prev.is_ascii_uppercase() && next_is_lower);
        if boundary && !output.ends_with('_') {
          output.push('_');
        }
      }
      output.push(c.to_ascii_lowercase());
    } else {
      output.push(c);
    }
  }

  output
}

/* Name of the generated builder module for a kind */
pub fn builder_module_name(kind_name: &str) -> String {
  format!("{}_builder", to_snake_case(kind_name))
}

/* Name of the lift function registered for an element choice */
pub fn coercion_fn_name(choice: &str) -> String {
  format!("build_expression_from_{}", to_snake_case(last_segment(choice)))
}

/* Emit a `///` doc block, one line per input line, at the given indentation */
pub fn emit_doc_comment(text: &str, indent: usize) -> String {
  let pad = " ".repeat(indent);
  let mut output = String::new();
  for line in text.lines() {
    let line = line.trim_end();
    if line.is_empty() {
      output.push_str(&format!("{}///\n", pad));
    } else {
      output.push_str(&format!("{}/// {}\n", pad, line));
    }
  }
  output
}
