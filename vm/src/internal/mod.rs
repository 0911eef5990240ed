////////////////////////////////////////////////////////////////////////////////
// File: src/internal/mod.rs
// Description: Internal module declarations
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 06.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

pub(crate) mod compile;
pub(crate) mod error;
pub(crate) mod intermediate;
pub(crate) mod program;
pub(crate) mod serialize;
