////////////////////////////////////////////////////////////////////////////////
// File: src/internal/program.rs
// Description: Hack assembly program builder
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 06.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use super::{error::TranslateError, intermediate::IntermediateRepresentation};

use shared::{
  util::helpers::Counter,
  vm::{Instruction, VmFile},
};

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

pub(crate) const STACK_BASE: u16 = 256;
pub(crate) const ENTRY_FUNCTION: &str = "Sys.init";
pub(crate) const END_LABEL: &str = "END";

////////////////////////////////////////////////////////////////////////////////
// Program
////////////////////////////////////////////////////////////////////////////////

/// Assembly for a whole translation unit. Every input file is folded into one
/// program so return labels and comparison labels stay unique across files.
#[derive(Debug)]
pub(crate) struct Program {
  pub(crate) name: String,
  pub(crate) instructions: String,
  pub(crate) label_id: usize,
  pub(crate) return_id: usize,
  pub(crate) annotate: bool,
  pub(crate) file_stem: String,
  pub(crate) function: Option<String>,
}

impl Program {
  pub(crate) fn new(name: &str, annotate: bool) -> Self {
    return Self {
      name: name.to_string(),
      instructions: String::new(),
      label_id: 0,
      return_id: 0,
      annotate,
      file_stem: name.to_string(),
      function: None,
    };
  }

  /// Lowers every instruction of `file`. Statics are qualified by the file
  /// stem; labels by the enclosing function.
  pub(crate) fn translate(
    &mut self,
    file: &VmFile,
  ) -> Result<(), TranslateError> {
    self.file_stem = file.stem.clone();
    self.function = None;

    for instruction in file.instructions.iter() {
      if self.annotate {
        self.push_comment(&instruction.to_string());
      }

      instruction.intermediate(self).map_err(|kind| {
        return TranslateError {
          file: file.name.clone(),
          scope: self.scope().to_string(),
          instruction: instruction.clone(),
          kind,
        };
      })?;
    }

    return Ok(());
  }

  /// Sets the stack pointer and calls the entry function.
  pub(crate) fn insert_init(&mut self) -> Result<(), TranslateError> {
    self.push_comment("bootstrap");
    self.push_const_to_d(STACK_BASE);
    self.push_d_to_ptr_val("SP");

    let call = Instruction::Call(ENTRY_FUNCTION.to_string(), 0);
    return call.intermediate(self).map_err(|kind| {
      return TranslateError {
        file: self.name.clone(),
        scope: self.scope().to_string(),
        instruction: call.clone(),
        kind,
      };
    });
  }

  /// Parks the CPU after the last instruction of a program without bootstrap.
  pub(crate) fn insert_end_loop(&mut self) {
    self.push_comment("end");
    self.push(&format!("({})", END_LABEL));
    self.push(&format!("@{}", END_LABEL));
    self.push("0;JMP");
  }

  /// Function currently being lowered, or the file stem outside functions.
  pub(crate) fn scope(&self) -> &str {
    return self.function.as_deref().unwrap_or(&self.file_stem);
  }

  pub(crate) fn qualified_label(&self, label: &str) -> String {
    return format!("{}${}", self.scope(), label);
  }

  //////////////////////////////////////////////////////////////////////////////
  // Emission Helpers
  //////////////////////////////////////////////////////////////////////////////

  pub(crate) fn push(&mut self, instruction: &str) {
    self.instructions.push_str(instruction);
    self.instructions.push('\n');
  }

  pub(crate) fn push_comment(&mut self, comment: &str) {
    self.push(&format!("// {}", comment));
  }

  pub(crate) fn push_inc_sp(&mut self) {
    self.push("@SP");
    self.push("M=M+1");
  }

  pub(crate) fn push_dec_sp(&mut self) {
    self.push("@SP");
    self.push("M=M-1");
  }

  pub(crate) fn push_d_to_stack(&mut self) {
    self.push("@SP");
    self.push("A=M");
    self.push("M=D");
    self.push_inc_sp();
  }

  /// Pops the top of the stack into D.
  pub(crate) fn push_stack_to_d(&mut self) {
    self.push_dec_sp();
    self.push("A=M");
    self.push("D=M");
  }

  pub(crate) fn push_ptr_val_to_d(&mut self, addr: &str) {
    self.push(&format!("@{}", addr));
    self.push("D=M");
  }

  pub(crate) fn push_d_to_ptr_val(&mut self, addr: &str) {
    self.push(&format!("@{}", addr));
    self.push("M=D");
  }

  pub(crate) fn push_const_to_d(&mut self, value: u16) {
    self.push(&format!("@{}", value));
    self.push("D=A");
  }

  pub(crate) fn push_label(&mut self, label: &str) {
    self.push(&format!("({})", label));
  }

  pub(crate) fn push_goto(&mut self, label: &str) {
    self.push(&format!("@{}", label));
    self.push("0;JMP");
  }

  pub(crate) fn push_if_goto(&mut self, label: &str) {
    self.push_stack_to_d();
    self.push(&format!("@{}", label));
    self.push("D;JNE");
  }

  /// Applies `instr` to the top of the stack in place.
  pub(crate) fn push_comp_stack_args_1(&mut self, instr: &str) {
    self.push("@SP");
    self.push("A=M-1");
    self.push(&format!("M={}", instr));
  }

  /// Pops y, then combines it into x in place: D holds y, M holds x.
  pub(crate) fn push_comp_stack_args_2(&mut self, instr: &str) {
    self.push("@SP");
    self.push("AM=M-1");
    self.push("D=M");
    self.push("A=A-1");
    self.push(&format!("M={}", instr));
  }

  /// Replaces x and y with -1 when `x - y` satisfies `jump`, 0 otherwise.
  pub(crate) fn push_comparison(&mut self, jump: &str) {
    let id = self.label_id.get_value_and_increment();
    let label_true = format!("__{}_TRUE_{}_{}", jump, self.file_stem, id);
    let label_end = format!("__{}_END_{}_{}", jump, self.file_stem, id);

    self.push_comp_stack_args_2("M-D");
    self.push("D=M");
    self.push(&format!("@{}", label_true));
    self.push(&format!("D;{}", jump));

    self.push("@SP");
    self.push("A=M-1");
    self.push("M=0");
    self.push_goto(&label_end);

    self.push_label(&label_true);
    self.push("@SP");
    self.push("A=M-1");
    self.push("M=-1");

    self.push_label(&label_end);
  }
}
