////////////////////////////////////////////////////////////////////////////////
// File: src/internal/parse.rs
// Description: Jack Compiler parsing module
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use super::{engine::CompilationEngine, tokenize::Tokenizer};

use anyhow::Result;
use shared::{
  info_print, io::os::FileInfo, util::settings::Setting, vm::Instruction,
};

////////////////////////////////////////////////////////////////////////////////
// Program
////////////////////////////////////////////////////////////////////////////////

/// Instructions compiled from one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Program {
  pub(crate) class_name: String,
  pub(crate) instructions: Vec<Instruction>,
}

////////////////////////////////////////////////////////////////////////////////
// Jack Parser
////////////////////////////////////////////////////////////////////////////////

pub(crate) struct JackParser;

impl JackParser {
  pub(crate) fn parse(file_info: &FileInfo) -> Result<Program> {
    info_print!("Parsing file: `{}`", file_info.name);

    let tokens = Tokenizer::new(file_info).collect::<Vec<_>>();

    if Setting::PrintTokens.is_debug_enabled() {
      info_print!("Tokens of `{}`", file_info.name);
      tokens.iter().for_each(|token| {
        println!("  {}", token);
      });
    }

    let program = CompilationEngine::new(file_info, tokens).compile_class()?;

    if Setting::PrintProgram.is_debug_enabled() {
      info_print!("Program `{}`", program.class_name);
      for instruction in program.instructions.iter() {
        println!("  {}", instruction);
      }
    }

    return Ok(program);
  }
}
