////////////////////////////////////////////////////////////////////////////////
// File: src/internal/intermediate.rs
// Description: Lowering of VM instructions to Hack assembly
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 06.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use super::{error::TranslateErrorKind, program::Program};

use shared::{
  util::helpers::Counter,
  vm::{ArithmeticOp, Instruction, Segment},
};

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

const TEMP_SEGMENT_OFFSET: u16 = 5;
const TEMP_SEGMENT_SIZE: u16 = 8;
const MAX_CONSTANT: u16 = 32767;

/// Return address plus the saved LCL, ARG, THIS and THAT.
const FRAME_SIZE: u16 = 5;

/// Base registers saved by `call`, in push order.
const SAVED_REGISTERS: [&str; 4] = ["LCL", "ARG", "THIS", "THAT"];

const FRAME_REGISTER: &str = "R13";
const RETURN_REGISTER: &str = "R14";

////////////////////////////////////////////////////////////////////////////////
// Traits
////////////////////////////////////////////////////////////////////////////////

pub(crate) trait IntermediateRepresentation {
  type Program;
  fn intermediate(
    &self,
    prog: &mut Self::Program,
  ) -> Result<(), TranslateErrorKind>;
}

impl IntermediateRepresentation for Instruction {
  type Program = Program;
  fn intermediate(&self, prog: &mut Program) -> Result<(), TranslateErrorKind> {
    match self {
      Instruction::Push(segment, index) => return push(prog, *segment, *index),
      Instruction::Pop(segment, index) => return pop(prog, *segment, *index),
      Instruction::Arithmetic(op) => arithmetic(prog, *op),
      Instruction::Label(label) => {
        let label = prog.qualified_label(label);
        prog.push_label(&label);
      }
      Instruction::Goto(label) => {
        let label = prog.qualified_label(label);
        prog.push_goto(&label);
      }
      Instruction::IfGoto(label) => {
        let label = prog.qualified_label(label);
        prog.push_if_goto(&label);
      }
      Instruction::Function(name, n_locals) => function(prog, name, *n_locals),
      Instruction::Call(name, n_args) => call(prog, name, *n_args),
      Instruction::Return => return_from(prog),
    }

    return Ok(());
  }
}

////////////////////////////////////////////////////////////////////////////////
// Memory Access
////////////////////////////////////////////////////////////////////////////////

/// Register holding the base address of a segment addressed through a pointer.
fn base_register(segment: Segment) -> Option<&'static str> {
  return match segment {
    Segment::Local => Some("LCL"),
    Segment::Argument => Some("ARG"),
    Segment::This => Some("THIS"),
    Segment::That => Some("THAT"),
    _ => None,
  };
}

fn pointer_register(index: u16) -> Result<&'static str, TranslateErrorKind> {
  return match index {
    0 => Ok("THIS"),
    1 => Ok("THAT"),
    _ => Err(TranslateErrorKind::PointerIndex(index)),
  };
}

fn temp_address(index: u16) -> Result<u16, TranslateErrorKind> {
  if index >= TEMP_SEGMENT_SIZE {
    return Err(TranslateErrorKind::TempIndex(index));
  }
  return Ok(TEMP_SEGMENT_OFFSET + index);
}

fn static_symbol(prog: &Program, index: u16) -> String {
  return format!("{}.{}", prog.file_stem, index);
}

fn push(
  prog: &mut Program,
  segment: Segment,
  index: u16,
) -> Result<(), TranslateErrorKind> {
  match segment {
    Segment::Constant => {
      if index > MAX_CONSTANT {
        return Err(TranslateErrorKind::ConstantOutOfRange(index));
      }
      prog.push_const_to_d(index);
    }
    Segment::Local | Segment::Argument | Segment::This | Segment::That => {
      let base = base_register(segment).unwrap_or_default();
      prog.push_ptr_val_to_d(base);
      prog.push(&format!("@{}", index));
      prog.push("A=D+A");
      prog.push("D=M");
    }
    Segment::Pointer => {
      let register = pointer_register(index)?;
      prog.push_ptr_val_to_d(register);
    }
    Segment::Temp => {
      let address = temp_address(index)?;
      prog.push_ptr_val_to_d(&address.to_string());
    }
    Segment::Static => {
      let symbol = static_symbol(prog, index);
      prog.push_ptr_val_to_d(&symbol);
    }
  }

  prog.push_d_to_stack();

  return Ok(());
}

fn pop(
  prog: &mut Program,
  segment: Segment,
  index: u16,
) -> Result<(), TranslateErrorKind> {
  match segment {
    Segment::Constant => return Err(TranslateErrorKind::PopConstant),
    Segment::Local | Segment::Argument | Segment::This | Segment::That => {
      let base = base_register(segment).unwrap_or_default();

      // Target address goes to R13 before the stack is touched
      prog.push_ptr_val_to_d(base);
      prog.push(&format!("@{}", index));
      prog.push("D=D+A");
      prog.push_d_to_ptr_val(FRAME_REGISTER);

      prog.push_stack_to_d();
      prog.push(&format!("@{}", FRAME_REGISTER));
      prog.push("A=M");
      prog.push("M=D");
    }
    Segment::Pointer => {
      let register = pointer_register(index)?;
      prog.push_stack_to_d();
      prog.push_d_to_ptr_val(register);
    }
    Segment::Temp => {
      let address = temp_address(index)?;
      prog.push_stack_to_d();
      prog.push_d_to_ptr_val(&address.to_string());
    }
    Segment::Static => {
      let symbol = static_symbol(prog, index);
      prog.push_stack_to_d();
      prog.push_d_to_ptr_val(&symbol);
    }
  }

  return Ok(());
}

////////////////////////////////////////////////////////////////////////////////
// Arithmetic
////////////////////////////////////////////////////////////////////////////////

fn arithmetic(prog: &mut Program, op: ArithmeticOp) {
  match op {
    ArithmeticOp::Add => prog.push_comp_stack_args_2("D+M"),
    ArithmeticOp::Sub => prog.push_comp_stack_args_2("M-D"),
    ArithmeticOp::And => prog.push_comp_stack_args_2("D&M"),
    ArithmeticOp::Or => prog.push_comp_stack_args_2("D|M"),
    ArithmeticOp::Neg => prog.push_comp_stack_args_1("-M"),
    ArithmeticOp::Not => prog.push_comp_stack_args_1("!M"),
    ArithmeticOp::Eq => prog.push_comparison("JEQ"),
    ArithmeticOp::Gt => prog.push_comparison("JGT"),
    ArithmeticOp::Lt => prog.push_comparison("JLT"),
  }
}

////////////////////////////////////////////////////////////////////////////////
// Function Calls
////////////////////////////////////////////////////////////////////////////////

fn function(prog: &mut Program, name: &str, n_locals: u16) {
  prog.function = Some(name.to_string());
  prog.push_label(name);

  for _ in 0..n_locals {
    prog.push("D=0");
    prog.push_d_to_stack();
  }
}

fn call(prog: &mut Program, name: &str, n_args: u16) {
  let id = prog.return_id.get_value_and_increment();
  let return_label = format!("{}$ret.{}", prog.scope(), id);

  // 1. Return address
  prog.push(&format!("@{}", return_label));
  prog.push("D=A");
  prog.push_d_to_stack();

  // 2. Caller frame
  for register in SAVED_REGISTERS {
    prog.push_ptr_val_to_d(register);
    prog.push_d_to_stack();
  }

  // 3. ARG = SP - 5 - n
  prog.push_ptr_val_to_d("SP");
  prog.push(&format!("@{}", u32::from(FRAME_SIZE) + u32::from(n_args)));
  prog.push("D=D-A");
  prog.push_d_to_ptr_val("ARG");

  // 4. LCL = SP
  prog.push_ptr_val_to_d("SP");
  prog.push_d_to_ptr_val("LCL");

  prog.push_goto(name);
  prog.push_label(&return_label);
}

fn return_from(prog: &mut Program) {
  // 1. Frame base and return address, before the return value can overwrite it
  prog.push_ptr_val_to_d("LCL");
  prog.push_d_to_ptr_val(FRAME_REGISTER);
  prog.push(&format!("@{}", FRAME_SIZE));
  prog.push("A=D-A");
  prog.push("D=M");
  prog.push_d_to_ptr_val(RETURN_REGISTER);

  // 2. Return value to the caller's stack top
  prog.push_stack_to_d();
  prog.push("@ARG");
  prog.push("A=M");
  prog.push("M=D");

  // 3. SP = ARG + 1
  prog.push("@ARG");
  prog.push("D=M+1");
  prog.push_d_to_ptr_val("SP");

  // 4. THAT, THIS, ARG, LCL from below the frame base
  for (offset, register) in SAVED_REGISTERS.iter().rev().enumerate() {
    prog.push_ptr_val_to_d(FRAME_REGISTER);
    prog.push(&format!("@{}", offset + 1));
    prog.push("A=D-A");
    prog.push("D=M");
    prog.push_d_to_ptr_val(register);
  }

  // 5. Jump back
  prog.push(&format!("@{}", RETURN_REGISTER));
  prog.push("A=M");
  prog.push("0;JMP");
}
