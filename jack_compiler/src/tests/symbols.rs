////////////////////////////////////////////////////////////////////////////////
// File: src/tests/symbols.rs
// Description: Symbol table tests
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use crate::internal::{
  error::ErrorKind,
  symbols::{SymbolKind, SymbolTable},
};

use shared::vm::Segment;

#[test]
#[doc = "Each kind counts its own dense indices from zero."]
fn indices_are_dense_per_kind() {
  for kind in SymbolKind::ALL {
    let mut table = SymbolTable::new();

    for (i, name) in ["a", "b", "c"].iter().enumerate() {
      assert_eq!(table.define(name, "int", kind), Ok(i as u16));
    }
    assert_eq!(table.count_of(kind), 3);
  }

  let mut table = SymbolTable::new();
  table.define("s", "int", SymbolKind::Static).unwrap();
  table.define("f", "int", SymbolKind::Field).unwrap();
  table.define("g", "int", SymbolKind::Field).unwrap();
  table.define("a", "int", SymbolKind::Argument).unwrap();
  table.define("l", "int", SymbolKind::Local).unwrap();

  assert_eq!(table.index_of("s"), Some(0));
  assert_eq!(table.index_of("g"), Some(1));
  assert_eq!(table.index_of("a"), Some(0));
  assert_eq!(table.index_of("l"), Some(0));
}

#[test]
#[doc = "Reset restarts argument and local indices but keeps the class scope."]
fn reset_subroutine_keeps_class_scope() {
  let mut table = SymbolTable::new();
  table.define("size", "int", SymbolKind::Field).unwrap();
  table.define("x", "int", SymbolKind::Argument).unwrap();
  table.define("i", "int", SymbolKind::Local).unwrap();

  table.reset_subroutine();

  assert_eq!(table.count_of(SymbolKind::Argument), 0);
  assert_eq!(table.count_of(SymbolKind::Local), 0);
  assert_eq!(table.count_of(SymbolKind::Field), 1);
  assert_eq!(table.kind_of("x"), None);
  assert_eq!(table.kind_of("size"), Some(SymbolKind::Field));
  assert_eq!(table.define("y", "int", SymbolKind::Argument), Ok(0));
}

#[test]
#[doc = "Subroutine names shadow class names; unknown names have no kind."]
fn lookup_prefers_subroutine_scope() {
  let mut table = SymbolTable::new();
  table.define("x", "int", SymbolKind::Field).unwrap();
  table.define("x", "Point", SymbolKind::Local).unwrap();

  assert_eq!(table.kind_of("x"), Some(SymbolKind::Local));
  assert_eq!(table.type_of("x"), Some("Point"));
  assert_eq!(table.kind_of("Output"), None);
  assert_eq!(table.type_of("Output"), None);
  assert_eq!(table.index_of("Output"), None);
}

#[test]
#[doc = "Declaring a name twice in one scope is an error."]
fn rejects_duplicates_in_same_scope() {
  let mut table = SymbolTable::new();
  table.define("x", "int", SymbolKind::Argument).unwrap();

  assert_eq!(
    table.define("x", "int", SymbolKind::Local),
    Err(ErrorKind::DuplicateDeclaration("x".to_string()))
  );
  assert_eq!(table.count_of(SymbolKind::Local), 0);
}

#[test]
#[doc = "Kinds map onto their storage segments."]
fn kinds_map_to_segments() {
  assert_eq!(SymbolKind::Static.segment(), Segment::Static);
  assert_eq!(SymbolKind::Field.segment(), Segment::This);
  assert_eq!(SymbolKind::Argument.segment(), Segment::Argument);
  assert_eq!(SymbolKind::Local.segment(), Segment::Local);
}
