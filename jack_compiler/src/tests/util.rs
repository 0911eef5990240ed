////////////////////////////////////////////////////////////////////////////////
// File: src/tests/util.rs
// Description: Jack Compiler test helpers
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use std::fs;

use crate::internal::{
  engine::CompilationEngine,
  error::{CompileError, ErrorKind},
  parse::{JackParser, Program},
  tokenize::Tokenizer,
};

use shared::{
  io::os::{read_file_list, FileInfo},
  util::{parse::parse_programs, traits::Serializable},
};

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

pub(super) const FIXTURES_DIR: &str = "src/tests/fixtures/";
pub(super) const JACK_EXTENSION: &str = "jack";
pub(super) const VM_EXTENSION: &str = "vm";

////////////////////////////////////////////////////////////////////////////////
// Test Helper Functions
////////////////////////////////////////////////////////////////////////////////

pub(super) fn compile_source(source: &str) -> Result<Program, CompileError> {
  let file = FileInfo::from_source("Test.jack", source).unwrap();
  let tokens = Tokenizer::new(&file).collect();
  return CompilationEngine::new(&file, tokens).compile_class();
}

/// Compiled instructions of `source`, one mnemonic per entry.
pub(super) fn compile_lines(source: &str) -> Vec<String> {
  let program = compile_source(source)
    .unwrap_or_else(|error| panic!("compilation failed:\n{}", error));
  return program
    .instructions
    .iter()
    .map(|instruction| return instruction.to_string())
    .collect();
}

pub(super) fn compile_error(source: &str) -> CompileError {
  return compile_source(source).expect_err("compilation should fail");
}

pub(super) fn compile_error_kind(source: &str) -> ErrorKind {
  return compile_error(source).kind;
}

/// Body of `Main.main`, without its `function` line.
pub(super) fn compile_main_body(body: &str) -> Vec<String> {
  let source = format!("class Main {{ function void main() {{ {} }} }}", body);
  return compile_lines(&source).into_iter().skip(1).collect();
}

/// Splits the instruction stream at each `function` line.
pub(super) fn split_functions(lines: &[String]) -> Vec<Vec<String>> {
  let mut functions: Vec<Vec<String>> = Vec::new();

  for line in lines {
    if line.starts_with("function ") || functions.is_empty() {
      functions.push(Vec::new());
    }
    if let Some(current) = functions.last_mut() {
      current.push(line.clone());
    }
  }

  return functions;
}

pub(super) fn lines(text: &str) -> Vec<String> {
  return text
    .lines()
    .map(str::trim)
    .filter(|line| return !line.is_empty())
    .map(str::to_string)
    .collect();
}

/// Compiles every class in a fixture directory and compares each result with
/// the checked-in `.vm` file of the same name.
pub(super) fn evaluate_fixture_dir(rel_path: &str) {
  let dir = FIXTURES_DIR.to_string() + rel_path;
  let files = read_file_list(&[dir], JACK_EXTENSION).unwrap();
  let programs = parse_programs(&files, JackParser::parse).unwrap();

  assert!(!programs.is_empty());

  for (program, file) in programs.iter().zip(files.iter()) {
    let expected_path = file.path.with_extension(VM_EXTENSION);
    let expected = fs::read_to_string(&expected_path)
      .unwrap_or_else(|_| panic!("missing `{}`", expected_path.display()))
      .replace("\r\n", "\n");

    assert_eq!(
      program.serialize(),
      expected,
      "output of `{}` differs",
      file.name
    );
  }
}
