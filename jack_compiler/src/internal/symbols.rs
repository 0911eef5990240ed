////////////////////////////////////////////////////////////////////////////////
// File: src/internal/symbols.rs
// Description: Two level symbol table
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use core::fmt;
use std::fmt::{Display, Formatter};

use super::error::ErrorKind;

use indexmap::IndexMap;
use shared::vm::Segment;

////////////////////////////////////////////////////////////////////////////////
// Symbol Kinds
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum SymbolKind {
  Static,
  Field,
  Argument,
  Local,
}

impl SymbolKind {
  #[cfg(test)]
  pub(crate) const ALL: [SymbolKind; 4] = [
    SymbolKind::Static,
    SymbolKind::Field,
    SymbolKind::Argument,
    SymbolKind::Local,
  ];

  pub(crate) fn segment(&self) -> Segment {
    return match self {
      SymbolKind::Static => Segment::Static,
      SymbolKind::Field => Segment::This,
      SymbolKind::Argument => Segment::Argument,
      SymbolKind::Local => Segment::Local,
    };
  }

  fn is_class_level(&self) -> bool {
    return matches!(self, SymbolKind::Static | SymbolKind::Field);
  }

  fn slot(&self) -> usize {
    return match self {
      SymbolKind::Static | SymbolKind::Argument => 0,
      SymbolKind::Field | SymbolKind::Local => 1,
    };
  }
}

impl Display for SymbolKind {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    return match self {
      SymbolKind::Static => write!(f, "static"),
      SymbolKind::Field => write!(f, "field"),
      SymbolKind::Argument => write!(f, "argument"),
      SymbolKind::Local => write!(f, "local"),
    };
  }
}

////////////////////////////////////////////////////////////////////////////////
// Symbol Table
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SymbolEntry {
  pub(crate) var_type: String,
  pub(crate) kind: SymbolKind,
  pub(crate) index: u16,
}

/// Entries of one scope in declaration order. Each scope holds two kinds,
/// whose next free index lives in `counts[kind.slot()]`.
#[derive(Debug, Clone, Default)]
struct Scope {
  entries: IndexMap<String, SymbolEntry>,
  counts: [u16; 2],
}

impl Scope {
  fn clear(&mut self) {
    self.entries.clear();
    self.counts = [0; 2];
  }
}

/// Class scope for statics and fields, subroutine scope for arguments and
/// locals. Lookups try the subroutine scope first.
#[derive(Debug, Clone, Default)]
pub(crate) struct SymbolTable {
  class_scope: Scope,
  subroutine_scope: Scope,
}

impl SymbolTable {
  pub(crate) fn new() -> Self {
    return Self::default();
  }

  fn scope_of(&self, kind: SymbolKind) -> &Scope {
    if kind.is_class_level() {
      return &self.class_scope;
    }
    return &self.subroutine_scope;
  }

  /// Records `name` with the next free index of `kind` and returns that index.
  pub(crate) fn define(
    &mut self,
    name: &str,
    var_type: &str,
    kind: SymbolKind,
  ) -> Result<u16, ErrorKind> {
    let scope = if kind.is_class_level() {
      &mut self.class_scope
    } else {
      &mut self.subroutine_scope
    };

    if scope.entries.contains_key(name) {
      return Err(ErrorKind::DuplicateDeclaration(name.to_string()));
    }

    let index = scope.counts[kind.slot()];
    scope.counts[kind.slot()] += 1;
    scope.entries.insert(
      name.to_string(),
      SymbolEntry {
        var_type: var_type.to_string(),
        kind,
        index,
      },
    );

    return Ok(index);
  }

  fn lookup(&self, name: &str) -> Option<&SymbolEntry> {
    return self
      .subroutine_scope
      .entries
      .get(name)
      .or_else(|| return self.class_scope.entries.get(name));
  }

  /// `None` marks a class or subroutine name rather than a variable.
  pub(crate) fn kind_of(&self, name: &str) -> Option<SymbolKind> {
    return self.lookup(name).map(|entry| return entry.kind);
  }

  pub(crate) fn type_of(&self, name: &str) -> Option<&str> {
    let entry = self.lookup(name)?;
    return Some(entry.var_type.as_str());
  }

  pub(crate) fn index_of(&self, name: &str) -> Option<u16> {
    return self.lookup(name).map(|entry| return entry.index);
  }

  pub(crate) fn count_of(&self, kind: SymbolKind) -> u16 {
    return self.scope_of(kind).counts[kind.slot()];
  }

  /// Clears the subroutine scope. The class scope lives until the table is
  /// dropped.
  pub(crate) fn reset_subroutine(&mut self) {
    self.subroutine_scope.clear();
  }
}

impl Display for SymbolTable {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    for (scope_name, scope) in [
      ("class", &self.class_scope),
      ("subroutine", &self.subroutine_scope),
    ] {
      writeln!(f, "  {} scope:", scope_name)?;
      for (name, entry) in scope.entries.iter() {
        writeln!(
          f,
          "    {:<16} {:<12} {:<8} {}",
          name, entry.var_type, entry.kind, entry.index
        )?;
      }
    }

    return Ok(());
  }
}
