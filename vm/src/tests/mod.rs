////////////////////////////////////////////////////////////////////////////////
// File: src/tests/mod.rs
// Description: Test module declarations
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 06.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

mod calling_convention;
mod lowering;
mod util;
