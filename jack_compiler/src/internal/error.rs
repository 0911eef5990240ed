////////////////////////////////////////////////////////////////////////////////
// File: src/internal/error.rs
// Description: Compilation errors
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use core::fmt;
use std::fmt::{Display, Formatter};

use super::tokenize::MAX_INTEGER_CONSTANT;

use shared::io::notify::{Position, SourceSnippet};

////////////////////////////////////////////////////////////////////////////////
// Error Kinds
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ErrorKind {
  UnexpectedToken { expected: String, found: String },
  UnexpectedEndOfFile { expected: String },
  DuplicateDeclaration(String),
  UndeclaredVariable(String),
  ThisInFunction,
  StringTooLong(usize),
  UnsupportedCharacter(char),
}

impl ErrorKind {
  fn class(&self) -> &'static str {
    return match self {
      ErrorKind::UnexpectedToken { .. }
      | ErrorKind::UnexpectedEndOfFile { .. } => "(ParseError)",
      ErrorKind::DuplicateDeclaration(_)
      | ErrorKind::UndeclaredVariable(_)
      | ErrorKind::ThisInFunction
      | ErrorKind::StringTooLong(_)
      | ErrorKind::UnsupportedCharacter(_) => "(SemanticError)",
    };
  }
}

impl Display for ErrorKind {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    return match self {
      ErrorKind::UnexpectedToken { expected, found } => {
        write!(f, "Expected {}. Found: {}.", expected, found)
      }
      ErrorKind::UnexpectedEndOfFile { expected } => {
        write!(f, "Unexpected end of file. Expected {}.", expected)
      }
      ErrorKind::DuplicateDeclaration(name) => {
        write!(f, "`{}` is already declared in this scope", name)
      }
      ErrorKind::UndeclaredVariable(name) => {
        write!(f, "Use of undeclared variable `{}`", name)
      }
      ErrorKind::ThisInFunction => {
        write!(f, "`this` cannot be referenced from within a function")
      }
      ErrorKind::StringTooLong(length) => write!(
        f,
        "String constant of length {} exceeds {}",
        length, MAX_INTEGER_CONSTANT
      ),
      ErrorKind::UnsupportedCharacter(c) => write!(
        f,
        "Character `{}` is outside of 0..={}",
        c, MAX_INTEGER_CONSTANT
      ),
    };
  }
}

////////////////////////////////////////////////////////////////////////////////
// Compile Error
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompileError {
  pub(crate) file: String,
  pub(crate) pos: Position,
  pub(crate) kind: ErrorKind,
}

impl CompileError {
  pub(crate) fn new(
    file: &str,
    content: &str,
    pos: usize,
    kind: ErrorKind,
  ) -> Self {
    return Self {
      file: file.to_string(),
      pos: Position::new(content, pos),
      kind,
    };
  }
}

impl Display for CompileError {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let message = format!("{} {}", self.kind.class(), self.kind);
    return write!(
      f,
      "{}\n{}",
      message,
      SourceSnippet::new(&self.file, self.pos.clone(), &message)
    );
  }
}

impl std::error::Error for CompileError {}
