////////////////////////////////////////////////////////////////////////////////
// File: src/internal/serialize.rs
// Description: Serialization of the assembly program
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 06.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use super::program::Program;

use shared::util::traits::Serializable;

impl Serializable for Program {
  type Output = String;
  fn serialize(&self) -> Self::Output {
    return self.instructions.clone();
  }
}
