////////////////////////////////////////////////////////////////////////////////
// File: src/util/settings.rs
// Description: Program settings
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use std::{collections::HashMap, sync::RwLock};

use crate::io::cli::{ArgType, CommandLineParser, DefaultArgType, Token};

use anyhow::{anyhow, Result};

////////////////////////////////////////////////////////////////////////////////
// Global Settings
////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, Default)]
pub(crate) struct SettingContent {
  flag_val: u64,
  values: Option<Vec<String>>,
}

impl SettingContent {
  pub(crate) fn new(flag_val: u64, values: Option<Vec<String>>) -> Self {
    return Self { flag_val, values };
  }
}

lazy_static::lazy_static! {
  pub(crate) static ref GLOBAL_SETTINGS: RwLock<HashMap<ArgType, SettingContent>> = {
    let mut map = HashMap::new();
    map.insert(ArgType::Debug, SettingContent::default());
    map.insert(ArgType::Output, SettingContent::default());
    map.insert(ArgType::NoInit, SettingContent::default());
    map.insert(ArgType::Annotate, SettingContent::default());
    return RwLock::new(map);
  };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
  PrintAll = 1 << 1,
  PrintTokens = 1 << 2,
  PrintSymbols = 1 << 3,
  PrintProgram = 1 << 4,
  Output = 1 << 5,
  NoInit = 1 << 6,
  Annotate = 1 << 7,
}

impl Setting {
  /// Folds the debug selectors given on the command line into a flag value.
  /// Unknown selectors are ignored; no selector at all selects `default`.
  pub fn from_vec(v: &[String], default: (u64, bool)) -> (u64, bool) {
    let (default_setting, set_value) = default;

    let value = v.iter().fold(0, |acc, s| {
      return acc
        | match s.as_str() {
          "all" => Setting::PrintAll as u64,
          "tokens" => Setting::PrintTokens as u64,
          "symbols" => Setting::PrintSymbols as u64,
          "program" => Setting::PrintProgram as u64,
          _ => 0,
        };
    });

    if value == 0 {
      return (default_setting, set_value);
    }

    return (value, set_value);
  }

  fn arg_type(&self) -> ArgType {
    return match self {
      Setting::PrintAll
      | Setting::PrintTokens
      | Setting::PrintSymbols
      | Setting::PrintProgram => ArgType::Debug,
      Setting::Output => ArgType::Output,
      Setting::NoInit => ArgType::NoInit,
      Setting::Annotate => ArgType::Annotate,
    };
  }

  /// Returns the parameters stored with the setting, or an error when the
  /// setting was not given on the command line.
  pub fn is_set(&self) -> Result<Option<Vec<String>>> {
    let settings = GLOBAL_SETTINGS
      .read()
      .map_err(|_| return anyhow!("(ArgError) Settings lock poisoned"))?;
    let content = settings.get(&self.arg_type()).cloned().unwrap_or_default();

    if content.flag_val & *self as u64 == 0 {
      return Err(anyhow!("(ArgError) Not set"));
    }

    return Ok(content.values);
  }

  /// Debug dumps are enabled by their own selector or by `all`.
  pub fn is_debug_enabled(&self) -> bool {
    return self.is_set().is_ok() || Setting::PrintAll.is_set().is_ok();
  }
}

pub fn set_global_setting(
  _c: &mut CommandLineParser,
  t: &mut Token,
) -> Result<()> {
  let mut settings = GLOBAL_SETTINGS
    .write()
    .map_err(|_| return anyhow!("(ArgError) Settings lock poisoned"))?;
  let entry = settings.get_mut(&t.arg_type).ok_or_else(|| {
    return anyhow!(
      "(ArgError) Could not set global setting key: {:?}",
      t.arg_type
    );
  })?;

  let parameters = t.parameters.clone().unwrap_or_default();
  let (flag, set_value) =
    Setting::from_vec(&parameters, t.arg_type.default());

  *entry = if set_value && !parameters.is_empty() {
    SettingContent::new(flag, Some(parameters))
  } else {
    SettingContent::new(flag, None)
  };

  return Ok(());
}
