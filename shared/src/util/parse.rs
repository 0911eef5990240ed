////////////////////////////////////////////////////////////////////////////////
// File: src/util/parse.rs
// Description: Batch parsing helpers
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use crate::{error_println, io::os::FileInfo, red};

use anyhow::{anyhow, Result};

/// Runs `parse` on every file. Each failure is reported; if any file failed
/// the whole batch fails, so no output is produced from a partial batch.
pub fn parse_programs<'a, F, P>(
  files: &'a [FileInfo],
  parse: F,
) -> Result<Vec<P>>
where
  F: Fn(&'a FileInfo) -> Result<P>,
{
  let mut programs = Vec::with_capacity(files.len());
  let mut failed = 0;

  for result in files.iter().map(parse) {
    match result {
      Ok(program) => programs.push(program),
      Err(error) => {
        error_println!("{}", error);
        failed += 1;
      }
    }
  }

  if failed > 0 {
    return Err(anyhow!(
      "(ParseError) {} of {} file(s) failed. {}!",
      failed,
      files.len(),
      red!("Aborting compilation", true, false)
    ));
  }

  return Ok(programs);
}
