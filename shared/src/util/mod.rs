////////////////////////////////////////////////////////////////////////////////
// File: src/util/mod.rs
// Description: Utility module
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

pub mod helpers;
pub mod parse;
pub mod settings;
pub mod traits;
