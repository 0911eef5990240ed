////////////////////////////////////////////////////////////////////////////////
// File: src/vm/parse.rs
// Description: Stack machine instruction parser
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 06.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use core::fmt;
use std::{
  fmt::{Display, Formatter},
  str::Lines,
};

use super::instruction::*;
use crate::io::{
  notify::{Position, SourceSnippet},
  os::FileInfo,
};

use anyhow::Result;

////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VmParseErrorKind {
  UnknownCommand(String),
  UnknownSegment(String),
  MissingField(&'static str),
  InvalidNumber(String),
  TrailingField(String),
}

impl Display for VmParseErrorKind {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    return match self {
      VmParseErrorKind::UnknownCommand(c) => {
        write!(f, "Unknown instruction: `{}`", c)
      }
      VmParseErrorKind::UnknownSegment(s) => {
        write!(f, "Unknown segment: `{}`", s)
      }
      VmParseErrorKind::MissingField(what) => write!(f, "Missing {}", what),
      VmParseErrorKind::InvalidNumber(n) => {
        write!(f, "Expected a number in 0..=65535, found `{}`", n)
      }
      VmParseErrorKind::TrailingField(t) => {
        write!(f, "Unexpected trailing field: `{}`", t)
      }
    };
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmParseError {
  pub file: String,
  pub pos: Position,
  pub kind: VmParseErrorKind,
}

impl VmParseError {
  pub fn line(&self) -> usize {
    return self.pos.line;
  }
}

impl Display for VmParseError {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let message = format!("(ParseError) {}", self.kind);
    return write!(
      f,
      "{}\n{}",
      message,
      SourceSnippet::new(&self.file, self.pos.clone(), &message)
    );
  }
}

impl std::error::Error for VmParseError {}

////////////////////////////////////////////////////////////////////////////////
// Parsed File
////////////////////////////////////////////////////////////////////////////////

/// Instructions of one `.vm` file. The stem qualifies `static` symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmFile {
  pub name: String,
  pub stem: String,
  pub instructions: Vec<Instruction>,
}

////////////////////////////////////////////////////////////////////////////////
// VM Instruction Parser
////////////////////////////////////////////////////////////////////////////////

pub struct VmParser<'a> {
  pos: usize,
  file_info: &'a FileInfo,
  file_lines: Lines<'a>,
}

impl<'a> VmParser<'a> {
  pub fn new(file_info: &'a FileInfo) -> Self {
    return Self {
      pos: 0,
      file_info,
      file_lines: file_info.content.lines(),
    };
  }

  pub fn parse(file_info: &'a FileInfo) -> Result<VmFile> {
    let instructions =
      Self::new(file_info).collect::<Result<Vec<_>, VmParseError>>()?;

    return Ok(VmFile {
      name: file_info.name.clone(),
      stem: file_info.stem.clone(),
      instructions,
    });
  }

  fn error(&self, offset: usize, kind: VmParseErrorKind) -> VmParseError {
    return VmParseError {
      file: self.file_info.name.clone(),
      pos: Position::new(&self.file_info.content, offset),
      kind,
    };
  }

  /// Whitespace separated fields with their byte offset in `line`.
  fn fields(line: &str) -> Vec<(usize, &str)> {
    let mut fields = Vec::new();
    let mut start = None;

    for (i, c) in line.char_indices() {
      match (c.is_whitespace(), start) {
        (true, Some(s)) => {
          fields.push((s, &line[s..i]));
          start = None;
        }
        (false, None) => start = Some(i),
        _ => {}
      }
    }

    if let Some(s) = start {
      fields.push((s, &line[s..]));
    }

    return fields;
  }

  fn parse_line(
    &self,
    line_start: usize,
    fields: &[(usize, &str)],
  ) -> Result<Instruction, VmParseError> {
    let (cmd_offset, cmd) = fields[0];
    let end_of_line = match fields.last() {
      Some((offset, text)) => line_start + offset + text.len(),
      None => line_start,
    };

    let field = |index: usize, what: &'static str| {
      return fields
        .get(index)
        .map(|(offset, text)| return (line_start + offset, *text))
        .ok_or_else(|| {
          return self.error(end_of_line, VmParseErrorKind::MissingField(what));
        });
    };

    let number = |index: usize, what: &'static str| {
      let (offset, text) = field(index, what)?;
      return text.parse::<u16>().map_err(|_| {
        let kind = VmParseErrorKind::InvalidNumber(text.to_string());
        return self.error(offset, kind);
      });
    };

    let segment = |index: usize| {
      let (offset, text) = field(index, "segment")?;
      return Segment::from_name(text).ok_or_else(|| {
        let kind = VmParseErrorKind::UnknownSegment(text.to_string());
        return self.error(offset, kind);
      });
    };

    let (instruction, arity) = match cmd {
      INSTR_PUSH => (Instruction::Push(segment(1)?, number(2, "index")?), 3),
      INSTR_POP => (Instruction::Pop(segment(1)?, number(2, "index")?), 3),
      INSTR_LABEL => {
        (Instruction::Label(field(1, "label name")?.1.to_string()), 2)
      }
      INSTR_GOTO => {
        (Instruction::Goto(field(1, "label name")?.1.to_string()), 2)
      }
      INSTR_IF_GOTO => (
        Instruction::IfGoto(field(1, "label name")?.1.to_string()),
        2,
      ),
      INSTR_FUNCTION => (
        Instruction::Function(
          field(1, "function name")?.1.to_string(),
          number(2, "local count")?,
        ),
        3,
      ),
      INSTR_CALL => (
        Instruction::Call(
          field(1, "function name")?.1.to_string(),
          number(2, "argument count")?,
        ),
        3,
      ),
      INSTR_RETURN => (Instruction::Return, 1),
      _ => match ArithmeticOp::from_name(cmd) {
        Some(op) => (Instruction::Arithmetic(op), 1),
        None => {
          return Err(self.error(
            line_start + cmd_offset,
            VmParseErrorKind::UnknownCommand(cmd.to_string()),
          ));
        }
      },
    };

    if let Some((offset, text)) = fields.get(arity) {
      return Err(self.error(
        line_start + offset,
        VmParseErrorKind::TrailingField(text.to_string()),
      ));
    }

    return Ok(instruction);
  }
}

impl<'a> Iterator for VmParser<'a> {
  type Item = Result<Instruction, VmParseError>;

  fn next(&mut self) -> Option<Self::Item> {
    while let Some(raw_line) = self.file_lines.next() {
      let line_start = self.pos;
      self.pos += raw_line.len() + 1;

      let line = match raw_line.find("//") {
        Some(comment_start) => &raw_line[..comment_start],
        None => raw_line,
      };
      let fields = Self::fields(line);

      if fields.is_empty() {
        continue;
      }

      return Some(self.parse_line(line_start, &fields));
    }

    return None;
  }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
