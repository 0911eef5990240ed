////////////////////////////////////////////////////////////////////////////////
// File: src/internal/mod.rs
// Description: Internal module tree
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

pub(crate) mod compile;
pub(crate) mod engine;
pub(crate) mod error;
pub(crate) mod parse;
pub(crate) mod serialize;
pub(crate) mod symbols;
pub(crate) mod tokenize;
