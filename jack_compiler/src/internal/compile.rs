////////////////////////////////////////////////////////////////////////////////
// File: src/internal/compile.rs
// Description: Compilation module
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use crate::internal::parse::JackParser;

use anyhow::{anyhow, Result};
use shared::{
  green, info_print,
  io::{
    cli::{CommandLineParser, Token},
    os::{dir_check, generate_output, output_setting, read_file_list},
  },
  util::parse::parse_programs,
};

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

const JACK_EXTENSION: &str = "jack";
const VM_EXTENSION: &str = "vm";

////////////////////////////////////////////////////////////////////////////////
// Compilation Step
////////////////////////////////////////////////////////////////////////////////

/// Compiles every `.jack` input to a `.vm` file next to it, or into the
/// `--output` directory. Nothing is written unless every file compiles.
pub(crate) fn compile(_c: &mut CommandLineParser, t: &mut Token) -> Result<()> {
  let paths = t
    .parameters
    .clone()
    .ok_or_else(|| return anyhow!("(ArgError) No input files provided!"))?;
  let files = read_file_list(&paths, JACK_EXTENSION)?;

  let programs = parse_programs(&files, JackParser::parse)?;
  info_print!("{}", green!("Parsing successful", true, false));

  let output_path = output_setting();
  let output_dir = match output_path.as_deref() {
    Some(dir) => Some(dir_check(dir)?),
    None => None,
  };

  let written = generate_output(&programs, &files, output_dir, VM_EXTENSION)?;

  for (path, _) in written.iter() {
    info_print!("Wrote `{}`", path.display());
  }
  info_print!("{}", green!("Compilation successful!", true, false));

  return Ok(());
}
