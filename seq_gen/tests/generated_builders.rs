/* Generated Builder Tests
 *
 * Compiles a copy of the generator's output for tests/fixtures/kinds.yaml
 * against small syntax types and drives the emitted API: the per-kind
 * `build_*` functions, the coercion lifts and `from_builder`.
 */

#![allow(dead_code)]

pub mod syntax {
  use seq_runtime::{SequenceValue, TrailingSeparator};

  #[derive(Debug, Clone, PartialEq, Eq)]
  pub struct ArrayElement {
    pub value: String,
    pub trailing_comma: bool,
  }

  impl ArrayElement {
    pub fn new(value: &str) -> Self {
      Self { value: value.to_string(), trailing_comma: false }
    }
  }

  impl TrailingSeparator for ArrayElement {
    fn ensuring_trailing_separator(self) -> Self {
      Self { trailing_comma: true, ..self }
    }

    fn has_trailing_separator(&self) -> bool {
      self.trailing_comma
    }
  }

  #[derive(Debug, Clone, PartialEq, Eq)]
  pub struct ArrayElementList(pub Vec<ArrayElement>);

  impl SequenceValue for ArrayElementList {
    type Element = ArrayElement;

    fn from_elements(elements: Vec<ArrayElement>) -> Self {
      Self(elements)
    }

    fn into_elements(self) -> Vec<ArrayElement> {
      self.0
    }
  }

  #[derive(Debug, Clone, PartialEq, Eq)]
  pub struct Token(pub &'static str);

  #[derive(Debug, Clone, PartialEq, Eq)]
  pub struct TokenList(pub Vec<Token>);

  impl SequenceValue for TokenList {
    type Element = Token;

    fn from_elements(elements: Vec<Token>) -> Self {
      Self(elements)
    }

    fn into_elements(self) -> Vec<Token> {
      self.0
    }
  }

  #[derive(Debug, Clone, PartialEq, Eq)]
  pub struct Stmt(pub &'static str);

  #[derive(Debug, Clone, PartialEq, Eq)]
  pub struct Decl(pub &'static str);

  #[derive(Debug, Clone, PartialEq, Eq)]
  pub enum CodeBlockItem {
    Stmt(Stmt),
    Decl(Decl),
  }

  impl From<Stmt> for CodeBlockItem {
    fn from(stmt: Stmt) -> Self {
      CodeBlockItem::Stmt(stmt)
    }
  }

  impl From<Decl> for CodeBlockItem {
    fn from(decl: Decl) -> Self {
      CodeBlockItem::Decl(decl)
    }
  }

  #[derive(Debug, Clone, PartialEq, Eq)]
  pub struct CodeBlockItemList(pub Vec<CodeBlockItem>);

  impl SequenceValue for CodeBlockItemList {
    type Element = CodeBlockItem;

    fn from_elements(elements: Vec<CodeBlockItem>) -> Self {
      Self(elements)
    }

    fn into_elements(self) -> Vec<CodeBlockItem> {
      self.0
    }
  }
}

include!("fixtures/builders.rs");

fn commas(list: &ArrayElementList) -> Vec<(&str, bool)> {
  list.0.iter().map(|e| (e.value.as_str(), e.trailing_comma)).collect()
}

/* ============================================================================
   Trailing-separator kind
   ============================================================================ */

#[test]
fn test_array_elements_get_commas_except_last() {
  use array_element_list_builder::*;

  let list = build_final_result(build_block([
    build_expression(ArrayElement::new("a")),
    build_expression(ArrayElement::new("b")),
    build_expression(ArrayElement::new("c")),
  ]));
  assert_eq!(commas(&list), vec![("a", true), ("b", true), ("c", false)]);
}

#[test]
fn test_empty_block_builds_empty_list() {
  use array_element_list_builder::*;

  let list = build_final_result(build_block(Vec::<Component>::new()));
  assert!(list.0.is_empty());
  assert!(ArrayElementList::from_builder(|_| {}).0.is_empty());
}

#[test]
fn test_spliced_elements_are_renormalized() {
  use array_element_list_builder::*;

  /* An already-built list ends without a comma; once followed by more
     elements its last member gains one */
  let inner = ArrayElementList::from_builder(|b| {
    b.add(ArrayElement::new("x"));
    b.add(ArrayElement::new("y"));
  });
  assert_eq!(commas(&inner), vec![("x", true), ("y", false)]);

  let outer = build_final_result(build_block([build_splice(inner), build_expression(ArrayElement::new("z"))]));
  assert_eq!(commas(&outer), vec![("x", true), ("y", true), ("z", false)]);
}

#[test]
fn test_skipped_optional_leaves_sole_element_unmarked() {
  use array_element_list_builder::*;

  let list = build_final_result(build_block([
    build_optional(None),
    build_expression(ArrayElement::new("d")),
  ]));
  assert_eq!(commas(&list), vec![("d", false)]);
}

#[test]
fn test_control_flow_through_generated_functions() {
  use array_element_list_builder::*;

  let include_b = false;
  let use_first = false;
  let list = build_final_result(build_block([
    build_expression(ArrayElement::new("a")),
    build_optional(include_b.then(|| build_expression(ArrayElement::new("b")))),
    if use_first {
      build_either_first(build_expression(ArrayElement::new("first")))
    } else {
      build_either_second(build_expression(ArrayElement::new("second")))
    },
    build_array(["p", "q"].map(|v| build_expression(ArrayElement::new(v)))),
    build_limited_availability(build_expression(ArrayElement::new("z"))),
  ]));
  assert_eq!(
    commas(&list),
    vec![("a", true), ("second", true), ("p", true), ("q", true), ("z", false)]
  );
}

#[test]
fn test_from_builder_with_plain_control_flow() {
  let items = ["one", "two", "three"];
  let list = ArrayElementList::from_builder(|b| {
    b.add(ArrayElement::new("head"));
    b.when(false, |b| {
      b.add(ArrayElement::new("skipped"));
    });
    b.for_each(items, |b, item| {
      b.add(ArrayElement::new(item));
    });
  });
  assert_eq!(
    commas(&list),
    vec![("head", true), ("one", true), ("two", true), ("three", false)]
  );
}

/* ============================================================================
   Atomic kind
   ============================================================================ */

#[test]
fn test_atomic_tokens_are_untouched() {
  use token_list_builder::*;

  let tokens = build_final_result(build_block([
    build_expression(Token("(")),
    build_expression(Token("x")),
    build_expression(Token(")")),
  ]));
  assert_eq!(tokens, TokenList(vec![Token("("), Token("x"), Token(")")]));

  let built = TokenList::from_builder(|b| {
    b.add(Token("("));
    b.either(true, |b| { b.add(Token("x")); }, |b| { b.add(Token("y")); });
    b.add(Token(")"));
  });
  assert_eq!(built, tokens);
}

/* ============================================================================
   Kind with element choices
   ============================================================================ */

#[test]
fn test_coercion_lifts_match_canonical_lift() {
  use code_block_item_list_builder::*;

  assert_eq!(
    build_expression_from_stmt(Stmt("let x = 1")).into_vec(),
    build_expression(CodeBlockItem::Stmt(Stmt("let x = 1"))).into_vec()
  );
  assert_eq!(
    build_expression_from_decl(Decl("fn f()")).into_vec(),
    build_expression(CodeBlockItem::Decl(Decl("fn f()"))).into_vec()
  );
}

#[test]
fn test_mixed_choices_build_one_list() {
  use code_block_item_list_builder::*;

  let expected = CodeBlockItemList(vec![
    CodeBlockItem::Decl(Decl("struct S;")),
    CodeBlockItem::Stmt(Stmt("return")),
  ]);

  let via_functions = build_final_result(build_block([
    build_expression_from_decl(Decl("struct S;")),
    build_expression_from_stmt(Stmt("return")),
  ]));
  assert_eq!(via_functions, expected);

  let via_builder = CodeBlockItemList::from_builder(|b| {
    b.add(Decl("struct S;"));
    b.add(Stmt("return"));
  });
  assert_eq!(via_builder, expected);
}
