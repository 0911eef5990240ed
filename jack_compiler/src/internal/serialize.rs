////////////////////////////////////////////////////////////////////////////////
// File: src/internal/serialize.rs
// Description: Serialization module
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use super::parse::Program;

use shared::util::traits::Serializable;

////////////////////////////////////////////////////////////////////////////////
// Program Serialization
////////////////////////////////////////////////////////////////////////////////

impl Serializable for Program {
  type Output = String;
  fn serialize(&self) -> String {
    return self
      .instructions
      .iter()
      .map(|instruction| return format!("{}\n", instruction))
      .collect::<String>();
  }
}
