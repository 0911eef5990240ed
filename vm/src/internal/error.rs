////////////////////////////////////////////////////////////////////////////////
// File: src/internal/error.rs
// Description: Translation errors
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 20.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use core::fmt;
use std::fmt::{Display, Formatter};

use shared::vm::Instruction;

////////////////////////////////////////////////////////////////////////////////
// Error Kinds
////////////////////////////////////////////////////////////////////////////////

/// Instructions that parse but have no Hack lowering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TranslateErrorKind {
  PointerIndex(u16),
  PopConstant,
  TempIndex(u16),
  ConstantOutOfRange(u16),
}

impl Display for TranslateErrorKind {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    return match self {
      TranslateErrorKind::PointerIndex(index) => {
        write!(f, "Pointer index must be 0 or 1. Found: {}", index)
      }
      TranslateErrorKind::PopConstant => {
        write!(f, "Cannot pop into the constant segment")
      }
      TranslateErrorKind::TempIndex(index) => {
        write!(f, "Temp index must be between 0 and 7. Found: {}", index)
      }
      TranslateErrorKind::ConstantOutOfRange(value) => {
        write!(f, "Constant must be at most 32767. Found: {}", value)
      }
    };
  }
}

////////////////////////////////////////////////////////////////////////////////
// Translate Error
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TranslateError {
  pub(crate) file: String,
  pub(crate) scope: String,
  pub(crate) instruction: Instruction,
  pub(crate) kind: TranslateErrorKind,
}

impl Display for TranslateError {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    return write!(
      f,
      "(TranslateError) {}\n  --> {} in `{}`: `{}`",
      self.kind, self.file, self.scope, self.instruction
    );
  }
}

impl std::error::Error for TranslateError {}
