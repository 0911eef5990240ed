////////////////////////////////////////////////////////////////////////////////
// File: src/vm/instruction.rs
// Description: Stack machine instruction model
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 06.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use core::fmt;
use std::fmt::{Display, Formatter};

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

const SEGMENT_ARG: &str = "argument";
const SEGMENT_CONST: &str = "constant";
const SEGMENT_LOCAL: &str = "local";
const SEGMENT_STATIC: &str = "static";
const SEGMENT_THIS: &str = "this";
const SEGMENT_THAT: &str = "that";
const SEGMENT_PTR: &str = "pointer";
const SEGMENT_TEMP: &str = "temp";

pub(crate) const INSTR_PUSH: &str = "push";
pub(crate) const INSTR_POP: &str = "pop";
pub(crate) const INSTR_LABEL: &str = "label";
pub(crate) const INSTR_GOTO: &str = "goto";
pub(crate) const INSTR_IF_GOTO: &str = "if-goto";
pub(crate) const INSTR_FUNCTION: &str = "function";
pub(crate) const INSTR_CALL: &str = "call";
pub(crate) const INSTR_RETURN: &str = "return";

////////////////////////////////////////////////////////////////////////////////
// Segments
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
  Constant,
  Argument,
  Local,
  Static,
  This,
  That,
  Pointer,
  Temp,
}

impl Segment {
  pub fn as_str(&self) -> &'static str {
    return match self {
      Segment::Constant => SEGMENT_CONST,
      Segment::Argument => SEGMENT_ARG,
      Segment::Local => SEGMENT_LOCAL,
      Segment::Static => SEGMENT_STATIC,
      Segment::This => SEGMENT_THIS,
      Segment::That => SEGMENT_THAT,
      Segment::Pointer => SEGMENT_PTR,
      Segment::Temp => SEGMENT_TEMP,
    };
  }

  pub fn from_name(name: &str) -> Option<Self> {
    return match name {
      SEGMENT_CONST => Some(Segment::Constant),
      SEGMENT_ARG => Some(Segment::Argument),
      SEGMENT_LOCAL => Some(Segment::Local),
      SEGMENT_STATIC => Some(Segment::Static),
      SEGMENT_THIS => Some(Segment::This),
      SEGMENT_THAT => Some(Segment::That),
      SEGMENT_PTR => Some(Segment::Pointer),
      SEGMENT_TEMP => Some(Segment::Temp),
      _ => None,
    };
  }
}

impl Display for Segment {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    return f.write_str(self.as_str());
  }
}

////////////////////////////////////////////////////////////////////////////////
// Arithmetic / Logic Operations
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
  Add,
  Sub,
  Neg,
  Eq,
  Gt,
  Lt,
  And,
  Or,
  Not,
}

impl ArithmeticOp {
  pub fn as_str(&self) -> &'static str {
    return match self {
      ArithmeticOp::Add => "add",
      ArithmeticOp::Sub => "sub",
      ArithmeticOp::Neg => "neg",
      ArithmeticOp::Eq => "eq",
      ArithmeticOp::Gt => "gt",
      ArithmeticOp::Lt => "lt",
      ArithmeticOp::And => "and",
      ArithmeticOp::Or => "or",
      ArithmeticOp::Not => "not",
    };
  }

  pub fn from_name(name: &str) -> Option<Self> {
    return match name {
      "add" => Some(ArithmeticOp::Add),
      "sub" => Some(ArithmeticOp::Sub),
      "neg" => Some(ArithmeticOp::Neg),
      "eq" => Some(ArithmeticOp::Eq),
      "gt" => Some(ArithmeticOp::Gt),
      "lt" => Some(ArithmeticOp::Lt),
      "and" => Some(ArithmeticOp::And),
      "or" => Some(ArithmeticOp::Or),
      "not" => Some(ArithmeticOp::Not),
      _ => None,
    };
  }
}

impl Display for ArithmeticOp {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    return f.write_str(self.as_str());
  }
}

////////////////////////////////////////////////////////////////////////////////
// Instructions
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
  Arithmetic,
  Push,
  Pop,
  Label,
  Goto,
  IfGoto,
  Function,
  Call,
  Return,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Instruction {
  Push(Segment, u16),
  Pop(Segment, u16),
  Arithmetic(ArithmeticOp),
  Label(String),
  Goto(String),
  IfGoto(String),
  Function(String, u16),
  Call(String, u16),
  Return,
}

impl Instruction {
  pub fn kind(&self) -> CommandKind {
    return match self {
      Instruction::Push(..) => CommandKind::Push,
      Instruction::Pop(..) => CommandKind::Pop,
      Instruction::Arithmetic(_) => CommandKind::Arithmetic,
      Instruction::Label(_) => CommandKind::Label,
      Instruction::Goto(_) => CommandKind::Goto,
      Instruction::IfGoto(_) => CommandKind::IfGoto,
      Instruction::Function(..) => CommandKind::Function,
      Instruction::Call(..) => CommandKind::Call,
      Instruction::Return => CommandKind::Return,
    };
  }

  /// First argument: the segment, label or function name. Arithmetic
  /// commands report their own mnemonic; `return` has none.
  pub fn arg1(&self) -> Option<&str> {
    return match self {
      Instruction::Push(segment, _) | Instruction::Pop(segment, _) => {
        Some(segment.as_str())
      }
      Instruction::Arithmetic(op) => Some(op.as_str()),
      Instruction::Label(name)
      | Instruction::Goto(name)
      | Instruction::IfGoto(name)
      | Instruction::Function(name, _)
      | Instruction::Call(name, _) => Some(name),
      Instruction::Return => None,
    };
  }

  /// Second argument: segment index, local count or argument count.
  pub fn arg2(&self) -> Option<u16> {
    return match self {
      Instruction::Push(_, n)
      | Instruction::Pop(_, n)
      | Instruction::Function(_, n)
      | Instruction::Call(_, n) => Some(*n),
      _ => None,
    };
  }
}

impl Display for Instruction {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    return match self {
      Instruction::Push(segment, index) => {
        write!(f, "{} {} {}", INSTR_PUSH, segment, index)
      }
      Instruction::Pop(segment, index) => {
        write!(f, "{} {} {}", INSTR_POP, segment, index)
      }
      Instruction::Arithmetic(op) => write!(f, "{}", op),
      Instruction::Label(name) => write!(f, "{} {}", INSTR_LABEL, name),
      Instruction::Goto(name) => write!(f, "{} {}", INSTR_GOTO, name),
      Instruction::IfGoto(name) => write!(f, "{} {}", INSTR_IF_GOTO, name),
      Instruction::Function(name, n_locals) => {
        write!(f, "{} {} {}", INSTR_FUNCTION, name, n_locals)
      }
      Instruction::Call(name, n_args) => {
        write!(f, "{} {} {}", INSTR_CALL, name, n_args)
      }
      Instruction::Return => write!(f, "{}", INSTR_RETURN),
    };
  }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
