////////////////////////////////////////////////////////////////////////////////
// File: src/vm/mod.rs
// Description: VM instruction model shared by the compiler and translator
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 20.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

pub mod instruction;
pub mod parse;

pub use instruction::{ArithmeticOp, CommandKind, Instruction, Segment};
pub use parse::{VmFile, VmParseError, VmParseErrorKind, VmParser};
