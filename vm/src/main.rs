////////////////////////////////////////////////////////////////////////////////
// File: src/main.rs
// Description: Main entry point
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 06.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]
#![allow(clippy::expect_fun_call)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::single_match)]

use std::process::ExitCode;

use shared::{
  error_println,
  io::cli::{ArgType, CommandLineParser, ParseRuleType},
};

mod internal;

#[cfg(test)]
mod tests;

////////////////////////////////////////////////////////////////////////////////
// Initialize Package Info
////////////////////////////////////////////////////////////////////////////////

static PACKAGE_INFO: [&str; 5] = [
  env!("CARGO_PKG_NAME"),
  env!("CARGO_PKG_VERSION"),
  env!("CARGO_PKG_AUTHORS"),
  env!("CARGO_PKG_LICENSE"),
  env!("CARGO_PKG_DESCRIPTION"),
];

////////////////////////////////////////////////////////////////////////////////
// Main Entry Point
////////////////////////////////////////////////////////////////////////////////

fn main() -> ExitCode {
  let result = CommandLineParser::default()
    .default_parse_rule(
      'h',
      "help",
      "-",
      "Print help",
      ArgType::Help(PACKAGE_INFO),
      0,
      0,
      shared::io::info::print_help,
    )
    .create_parse_rule(
      'v',
      "version",
      "-",
      "Print version",
      ArgType::Version(PACKAGE_INFO),
      0,
      0,
      ParseRuleType::Executable,
      shared::io::info::print_version,
    )
    .create_parse_rule(
      'd',
      "debug",
      "[(all|program)*]",
      "Debug print settings (default: all)",
      ArgType::Debug,
      0,
      usize::MAX,
      ParseRuleType::Setting,
      shared::util::settings::set_global_setting,
    )
    .create_parse_rule(
      'o',
      "output",
      "<dir>|<file>.asm",
      "Set the output directory or file for the generated .asm file",
      ArgType::Output,
      1,
      1,
      ParseRuleType::Setting,
      shared::util::settings::set_global_setting,
    )
    .create_parse_rule(
      'n',
      "no-init",
      "-",
      "Do not emit the bootstrap code that calls Sys.init",
      ArgType::NoInit,
      0,
      0,
      ParseRuleType::Setting,
      shared::util::settings::set_global_setting,
    )
    .create_parse_rule(
      'a',
      "annotate",
      "-",
      "Emit each VM instruction as a comment before its assembly",
      ArgType::Annotate,
      0,
      0,
      ParseRuleType::Setting,
      shared::util::settings::set_global_setting,
    )
    .create_parse_rule(
      't',
      "translate",
      "[(<dir>|<file>.vm)+]",
      "Translate the list of .vm files or all .vm files in the directory",
      ArgType::Translate,
      1,
      usize::MAX,
      ParseRuleType::Executable,
      internal::compile::translate,
    )
    .parse(std::env::args().skip(1))
    .and_then(|parser| return parser.evaluate());

  if let Err(error) = result {
    error_println!("{}", error);
    return ExitCode::FAILURE;
  }

  return ExitCode::SUCCESS;
}
