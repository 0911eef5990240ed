////////////////////////////////////////////////////////////////////////////////
// File: src/internal/compile.rs
// Description: Translation module
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 06.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
};

use super::{
  error::TranslateError,
  program::{Program, ENTRY_FUNCTION},
};

use anyhow::{anyhow, Result};
use shared::{
  green, info_print,
  io::{
    cli::{CommandLineParser, Token},
    os::{dir_check, output_setting, read_file_list, write_file, FileInfo},
  },
  util::{parse::parse_programs, settings::Setting, traits::Serializable},
  vm::{Instruction, VmFile, VmParser},
  warning_print,
};

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

const VM_EXTENSION: &str = "vm";
const ASM_EXTENSION: &str = "asm";

////////////////////////////////////////////////////////////////////////////////
// Translation Step
////////////////////////////////////////////////////////////////////////////////

/// Translates every `.vm` input into a single `.asm` file.
pub(crate) fn translate(
  _c: &mut CommandLineParser,
  t: &mut Token,
) -> Result<()> {
  let paths = t
    .parameters
    .clone()
    .ok_or_else(|| return anyhow!("(ArgError) No input files provided!"))?;
  let files = read_file_list(&paths, VM_EXTENSION)?;

  let vm_files = parse_programs(&files, |file| {
    info_print!("Parsing file: `{}`", file.name);
    return VmParser::parse(file);
  })?;
  info_print!("{}", green!("Parsing successful", true, false));

  let bootstrap = Setting::NoInit.is_set().is_err();
  if bootstrap && !defines_function(&vm_files, ENTRY_FUNCTION) {
    warning_print!(
      "No input defines `{}`. Use `--no-init` for programs without it",
      ENTRY_FUNCTION
    );
  }

  let target = output_target(&paths, &files)?;
  let name = target
    .file_stem()
    .map(|stem| return stem.to_string_lossy().to_string())
    .ok_or_else(|| return anyhow!("(ArgError) Invalid output path"))?;

  let program = build_program(
    &name,
    &vm_files,
    bootstrap,
    Setting::Annotate.is_set().is_ok(),
  )?;

  if Setting::PrintProgram.is_debug_enabled() {
    info_print!("Program `{}`", program.name);
    print!("{}", program.instructions);
  }

  let (path, _) = write_file(target, program.serialize())?;

  info_print!("Wrote `{}`", path.display());
  info_print!("{}", green!("Translation successful!", true, false));

  return Ok(());
}

/// Folds all files into one program, in input order. Without bootstrap the
/// program ends in a halt loop instead.
pub(crate) fn build_program(
  name: &str,
  files: &[VmFile],
  bootstrap: bool,
  annotate: bool,
) -> Result<Program, TranslateError> {
  let mut program = Program::new(name, annotate);

  if bootstrap {
    program.insert_init()?;
  }

  for file in files.iter() {
    program.translate(file)?;
  }

  if !bootstrap {
    program.insert_end_loop();
  }

  return Ok(program);
}

fn defines_function(files: &[VmFile], name: &str) -> bool {
  return files.iter().any(|file| {
    return file.instructions.iter().any(|instruction| {
      return matches!(instruction, Instruction::Function(f, _) if f == name);
    });
  });
}

////////////////////////////////////////////////////////////////////////////////
// Output Location
////////////////////////////////////////////////////////////////////////////////

/// `--output` may name the `.asm` file itself or a directory for it.
fn output_target(paths: &[String], files: &[FileInfo]) -> Result<PathBuf> {
  let default_target = default_target(paths, files)?;

  return match output_setting() {
    Some(path) if path.extension() == Some(OsStr::new(ASM_EXTENSION)) => {
      if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
          dir_check(parent)?;
        }
      }
      Ok(path)
    }
    Some(dir) => {
      let file_name = default_target
        .file_name()
        .ok_or_else(|| return anyhow!("(ArgError) Invalid output path"))?;
      Ok(dir_check(&dir)?.join(file_name))
    }
    None => Ok(default_target),
  };
}

/// A single input directory `Dir` yields `Dir/Dir.asm`, anything else is
/// named after the first input file.
fn default_target(paths: &[String], files: &[FileInfo]) -> Result<PathBuf> {
  if let [single] = paths {
    let dir = Path::new(single);

    if dir.is_dir() {
      let name = dir
        .canonicalize()?
        .file_name()
        .map(|name| return name.to_string_lossy().to_string())
        .ok_or_else(|| {
          return anyhow!("(ArgError) Cannot name output for `{}`", single);
        })?;

      return Ok(dir.join(format!("{}.{}", name, ASM_EXTENSION)));
    }
  }

  let first = files
    .first()
    .ok_or_else(|| return anyhow!("(ArgError) No input files provided!"))?;

  return Ok(first.path.with_extension(ASM_EXTENSION));
}
