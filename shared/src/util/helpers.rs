////////////////////////////////////////////////////////////////////////////////
// File: src/util/helpers.rs
// Description: Helper functions
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

////////////////////////////////////////////////////////////////////////////////
// Counters
////////////////////////////////////////////////////////////////////////////////

pub trait Counter {
  fn get_value_and_increment(&mut self) -> Self;
}

impl Counter for usize {
  fn get_value_and_increment(&mut self) -> usize {
    let current = *self;
    *self += 1;
    return current;
  }
}
