/* Element coercion resolution: what a builder block accepts, per kind */

use crate::codegen::rust_gen::helpers::{builder_module_name, coercion_fn_name, nested_type_path};
use crate::schema::types::KindDescriptor;
use crate::schema::validate::{SchemaDefects, SchemaError, validate_catalog};
use indexmap::IndexMap;
use seq_runtime::AssemblyPolicy;
use serde::Serializer;
use serde_derive::Serialize;
use tracing::{debug, warn};

/* The builder's statement-level type */
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "form", rename_all = "kebab-case", rename_all_fields = "kebab-case")]
pub enum ExpressionType {
  /* No restriction: the element type itself */
  Element { type_name: String },
  /* Restricted choices: the sequence type's own unified element */
  UnifiedElement { sequence_type: String },
}

impl ExpressionType {
  /* Rust spelling of the expression type inside a generated builder module */
  pub fn to_rust(&self, runtime_crate: &str) -> String {
    match self {
      ExpressionType::Element { type_name } => nested_type_path(type_name),
      ExpressionType::UnifiedElement { sequence_type } => {
        format!("<{} as {}::SequenceValue>::Element", sequence_type, runtime_crate)
      }
    }
  }
}

/* One registered `(choice -> Expression)` coercion */
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Coercion {
  pub source_type: String,
  pub lift_fn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResolvedKind {
  pub name: String,
  pub module_name: String,
  pub element_type: String,
  pub expression: ExpressionType,
  pub coercions: Vec<Coercion>,
  #[serde(serialize_with = "serialize_policy")]
  pub policy: AssemblyPolicy,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comment: Option<String>,
}

fn serialize_policy<S: Serializer>(policy: &AssemblyPolicy, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_str(policy.as_str())
}

impl ResolvedKind {
  /* Resolve a descriptor that already passed validation */
  pub fn from_descriptor(kind: &KindDescriptor) -> Result<Self, SchemaError> {
    let element_type = kind
      .element_type
      .clone()
      .ok_or_else(|| SchemaError::MissingElementType { kind_name: kind.name.clone() })?;

    let (expression, coercions) = if kind.has_element_choices() {
      let coercions = kind
        .element_choices
        .iter()
        .map(|choice| Coercion { source_type: choice.clone(), lift_fn: coercion_fn_name(choice) })
        .collect();
      (ExpressionType::UnifiedElement { sequence_type: kind.name.clone() }, coercions)
    } else {
      (ExpressionType::Element { type_name: element_type.clone() }, Vec::new())
    };

    if kind.element_is_atomic && kind.requires_trailing_separator {
      warn!(kind = %kind.name, "atomic element kind also requests trailing separators; atomic wins");
    }

    Ok(Self {
      name: kind.name.clone(),
      module_name: builder_module_name(&kind.name),
      element_type,
      expression,
      coercions,
      policy: AssemblyPolicy::from_traits(kind.element_is_atomic, kind.requires_trailing_separator),
      comment: kind.comment.clone(),
    })
  }
}

/* Resolves every kind of a catalog, keeping schema order */
#[derive(Debug, Default)]
pub struct KindResolver {
  pub descriptors: Vec<KindDescriptor>,
  pub kinds: IndexMap<String, ResolvedKind>,
}

impl KindResolver {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_kind(&mut self, kind: KindDescriptor) {
    self.descriptors.push(kind);
  }

  /* Validate, then resolve. Nothing is resolved if any defect is found */
  pub fn resolve_all(&mut self) -> Result<(), SchemaDefects> {
    let catalog = crate::schema::types::KindCatalog::new(self.descriptors.clone());
    let errors = validate_catalog(&catalog);
    if !errors.is_empty() {
      return Err(SchemaDefects(errors));
    }

    self.kinds.clear();
    for kind in &self.descriptors {
      let resolved = ResolvedKind::from_descriptor(kind).map_err(|e| SchemaDefects(vec![e]))?;
      debug!(
        kind = %resolved.name,
        module = %resolved.module_name,
        coercions = resolved.coercions.len(),
        policy = resolved.policy.as_str(),
        "resolved kind"
      );
      self.kinds.insert(resolved.name.clone(), resolved);
    }

    Ok(())
  }

  pub fn get_kind_info(&self, name: &str) -> Option<&ResolvedKind> {
    self.kinds.get(name)
  }

  /* Kind names in schema order */
  pub fn resolution_order(&self) -> impl Iterator<Item = &str> {
    self.kinds.keys().map(String::as_str)
  }

  pub fn resolved_kinds(&self) -> Vec<&ResolvedKind> {
    self.kinds.values().collect()
  }
}
