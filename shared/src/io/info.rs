////////////////////////////////////////////////////////////////////////////////
// File: src/io/info.rs
// Description: Program usage info
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use crate::{cyan, green, yellow};

use super::cli::{ArgType, CommandLineParser, Token};

use anyhow::{anyhow, Result};

////////////////////////////////////////////////////////////////////////////////
// General Usage Info
////////////////////////////////////////////////////////////////////////////////

pub fn print_help(c: &mut CommandLineParser, t: &mut Token) -> Result<()> {
  let ArgType::Help([name, version, authors, ..]) = t.arg_type else {
    return Err(anyhow!(
      "(ArgError) Help token does not contain the package info"
    ));
  };

  let flags = c
    .parse_rules
    .iter()
    .map(|rule| {
      return format!(
        "\n  -{:1}    --{:11} {:31} {}",
        rule.flag, rule.long_flag, rule.usage, rule.description
      );
    })
    .collect::<String>();
  let headings = green!(
    r#"
  Flag  Long Flag     Params                          Description
  ----  ---------     ------                          -----------"#,
    true,
    false
  );

  println!(
    "{} - {} v{}\n\n{} {} {}\n{}{}",
    authors,
    cyan!(name, true, false),
    version,
    green!("Usage:", true, false),
    cyan!(name, true, false),
    yellow!("[<Argument>*]", false, false),
    headings,
    flags
  );

  return Ok(());
}

pub fn print_version(_c: &mut CommandLineParser, t: &mut Token) -> Result<()> {
  let ArgType::Version([name, version, authors, license, description]) =
    t.arg_type
  else {
    return Err(anyhow!(
      "(ArgError) Version token does not contain the package info"
    ));
  };

  println!(
    "{}     {} v{}\n{}      {}\n{}     {}\n{} {}",
    green!("Version:", true, false),
    cyan!(name, true, false),
    version,
    green!("Author:", true, false),
    authors,
    green!("License:", true, false),
    license,
    green!("Description:", true, false),
    description
  );

  return Ok(());
}
