/* Schema defect detection, run before any code is emitted */

use crate::codegen::rust_gen::helpers::{
  builder_module_name, coercion_fn_name, is_reserved_name, is_rust_identifier, is_type_path,
};
use crate::schema::types::{KindCatalog, KindDescriptor};
use indexmap::IndexMap;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
  #[error("kind name '{kind_name}' is not a valid Rust identifier")]
  InvalidKindName { kind_name: String },
  #[error("kind '{kind_name}' has no element type")]
  MissingElementType { kind_name: String },
  #[error("kind '{kind_name}' references '{type_path}', which is not a Rust type path")]
  InvalidTypePath { kind_name: String, type_path: String },
  #[error("kind '{kind_name}' is declared more than once")]
  DuplicateKind { kind_name: String },
  #[error("kind '{kind_name}' lists element choice '{choice}' more than once")]
  DuplicateChoice { kind_name: String, choice: String },
  #[error("kind '{kind_name}' lists its own element type '{choice}' as a choice; no conversion can be registered")]
  SelfChoice { kind_name: String, choice: String },
  #[error("kind '{kind_name}': choices '{first}' and '{second}' would both lift through '{lift_fn}'")]
  ChoiceNameCollision {
    kind_name: String,
    first: String,
    second: String,
    lift_fn: String,
  },
  #[error("kind '{kind_name}' uses '{name}', which the generated builder module reserves")]
  ReservedName { kind_name: String, name: String },
  #[error("kinds '{first}' and '{second}' would both generate module '{module_name}'")]
  ModuleNameCollision {
    first: String,
    second: String,
    module_name: String,
  },
}

impl SchemaError {
  /* Short tag used in console reports */
  pub fn error_type(&self) -> &'static str {
    match self {
      SchemaError::InvalidKindName { .. } => "invalid-kind-name",
      SchemaError::MissingElementType { .. } => "missing-element-type",
      SchemaError::InvalidTypePath { .. } => "invalid-type-path",
      SchemaError::DuplicateKind { .. } => "duplicate-kind",
      SchemaError::DuplicateChoice { .. } => "duplicate-choice",
      SchemaError::SelfChoice { .. } => "self-choice",
      SchemaError::ChoiceNameCollision { .. } => "choice-name-collision",
      SchemaError::ReservedName { .. } => "reserved-name",
      SchemaError::ModuleNameCollision { .. } => "module-name-collision",
    }
  }
}

/* Every defect found in a catalog */
#[derive(Debug, Error)]
#[error("{} schema defect(s) found", .0.len())]
pub struct SchemaDefects(pub Vec<SchemaError>);

/* Check one kind in isolation */
pub fn validate_kind(kind: &KindDescriptor) -> Vec<SchemaError> {
  let mut errors = Vec::new();
  let kind_name = kind.name.clone();

  if !is_rust_identifier(&kind.name) {
    errors.push(SchemaError::InvalidKindName { kind_name: kind_name.clone() });
  } else if is_reserved_name(&kind.name) {
    errors.push(SchemaError::ReservedName { kind_name: kind_name.clone(), name: kind.name.clone() });
  }

  let element_type = match kind.element_type.as_deref() {
    Some(element_type) if !element_type.trim().is_empty() => element_type,
    _ => {
      errors.push(SchemaError::MissingElementType { kind_name });
      return errors;
    }
  };

  if !is_type_path(element_type) {
    errors.push(SchemaError::InvalidTypePath {
      kind_name: kind_name.clone(),
      type_path: element_type.to_string(),
    });
  } else if is_reserved_name(element_type) {
    errors.push(SchemaError::ReservedName { kind_name: kind_name.clone(), name: element_type.to_string() });
  }

  /* lift function name -> choice that claimed it */
  let mut lift_fns: IndexMap<String, &str> = IndexMap::new();
  for (index, choice) in kind.element_choices.iter().enumerate() {
    if !is_type_path(choice) {
      errors.push(SchemaError::InvalidTypePath { kind_name: kind_name.clone(), type_path: choice.clone() });
      continue;
    }
    if is_reserved_name(choice) {
      errors.push(SchemaError::ReservedName { kind_name: kind_name.clone(), name: choice.clone() });
    }
    if choice == element_type {
      errors.push(SchemaError::SelfChoice { kind_name: kind_name.clone(), choice: choice.clone() });
      continue;
    }
    if kind.element_choices[..index].contains(choice) {
      errors.push(SchemaError::DuplicateChoice { kind_name: kind_name.clone(), choice: choice.clone() });
      continue;
    }

    let lift_fn = coercion_fn_name(choice);
    if let Some(first) = lift_fns.get(&lift_fn) {
      errors.push(SchemaError::ChoiceNameCollision {
        kind_name: kind_name.clone(),
        first: first.to_string(),
        second: choice.clone(),
        lift_fn,
      });
      continue;
    }
    lift_fns.insert(lift_fn, choice);
  }

  errors
}

/* Check a whole catalog: each kind, then cross-kind naming */
pub fn validate_catalog(catalog: &KindCatalog) -> Vec<SchemaError> {
  let mut errors = Vec::new();
  /* kind name -> module name */
  let mut seen_kinds: IndexMap<&str, String> = IndexMap::new();
  /* module name -> kind name */
  let mut seen_modules: IndexMap<String, &str> = IndexMap::new();

  for kind in &catalog.kinds {
    errors.extend(validate_kind(kind));

    if seen_kinds.contains_key(kind.name.as_str()) {
      errors.push(SchemaError::DuplicateKind { kind_name: kind.name.clone() });
      continue;
    }

    let module_name = builder_module_name(&kind.name);
    if let Some(first) = seen_modules.get(&module_name) {
      errors.push(SchemaError::ModuleNameCollision {
        first: first.to_string(),
        second: kind.name.clone(),
        module_name: module_name.clone(),
      });
    } else {
      seen_modules.insert(module_name.clone(), kind.name.as_str());
    }
    seen_kinds.insert(kind.name.as_str(), module_name);
  }

  errors
}
