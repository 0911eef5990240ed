////////////////////////////////////////////////////////////////////////////////
// File: src/io/cli.rs
// Description: CLI parser
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use crate::util::settings::Setting;

use anyhow::{anyhow, Result};

////////////////////////////////////////////////////////////////////////////////
// Commandline Parser Definitions
////////////////////////////////////////////////////////////////////////////////

pub trait DefaultArgType {
  fn default(&self) -> (u64, bool);
}

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum ArgType {
  Compile,
  Translate,
  Version([&'static str; 5]),
  Help([&'static str; 5]),
  Debug,
  Output,
  NoInit,
  Annotate,
}

impl DefaultArgType for ArgType {
  fn default(&self) -> (u64, bool) {
    return match self {
      ArgType::Debug => (Setting::PrintAll as u64, true),
      ArgType::Output => (Setting::Output as u64, true),
      ArgType::NoInit => (Setting::NoInit as u64, false),
      ArgType::Annotate => (Setting::Annotate as u64, false),
      _ => (0, false),
    };
  }
}

/// Settings are evaluated before executables so that executables observe them.
#[derive(Debug, Copy, Clone, Ord, Eq, PartialOrd, PartialEq)]
pub enum ParseRuleType {
  Setting,
  Executable,
}

pub type Callback = fn(&mut CommandLineParser, &mut Token) -> Result<()>;

pub struct ParseRule {
  pub flag: char,
  pub long_flag: String,
  pub usage: String,
  pub description: String,
  pub arg_type: ArgType,
  pub parameters_min: usize,
  pub parameters_max: usize,
  pub rule_type: ParseRuleType,
  pub callback: Callback,
}

#[derive(Clone, Debug)]
pub struct Token {
  pub parse_rule_type: ParseRuleType,
  pub arg_type: ArgType,
  pub parameters: Option<Vec<String>>,
}

impl Token {
  pub fn new(
    parse_rule_type: ParseRuleType,
    arg_type: ArgType,
    parameters: Option<Vec<String>>,
  ) -> Self {
    return Self {
      parse_rule_type,
      arg_type,
      parameters,
    };
  }
}

////////////////////////////////////////////////////////////////////////////////
// Commandline Parser Implementation
////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
pub struct CommandLineParser {
  pub default_parse_rule: Option<usize>,
  pub tokens: Vec<Token>,
  pub parse_rules: Vec<ParseRule>,
}

impl CommandLineParser {
  const FLAG_PREFIX: char = '-';
  const LONG_FLAG_PREFIX: &'static str = "--";

  /// Registers the rule that runs when no arguments are given at all.
  pub fn default_parse_rule(
    &mut self,
    flag: char,
    long_flag: &str,
    usage: &str,
    description: &str,
    arg_type: ArgType,
    parameters_min: usize,
    parameters_max: usize,
    callback: Callback,
  ) -> &mut Self {
    self.create_parse_rule(
      flag,
      long_flag,
      usage,
      description,
      arg_type,
      parameters_min,
      parameters_max,
      ParseRuleType::Executable,
      callback,
    );

    self.default_parse_rule = Some(self.parse_rules.len() - 1);

    return self;
  }

  pub fn create_parse_rule(
    &mut self,
    flag: char,
    long_flag: &str,
    usage: &str,
    description: &str,
    arg_type: ArgType,
    parameters_min: usize,
    parameters_max: usize,
    rule_type: ParseRuleType,
    callback: Callback,
  ) -> &mut Self {
    assert!(parameters_min <= parameters_max);

    self.parse_rules.push(ParseRule {
      flag,
      long_flag: long_flag.to_string(),
      usage: usage.to_string(),
      description: description.to_string(),
      arg_type,
      parameters_min,
      parameters_max,
      rule_type,
      callback,
    });

    return self;
  }

  fn find_parse_rules(&self, arg: &str) -> Result<Vec<usize>> {
    if let Some(long_flag) = arg.strip_prefix(Self::LONG_FLAG_PREFIX) {
      return self
        .parse_rules
        .iter()
        .position(|rule| return rule.long_flag == long_flag)
        .map(|index| return vec![index])
        .ok_or_else(|| {
          return anyhow!(
            "(ArgError) Invalid flag: `{}`. Use `--help` for more information.",
            long_flag
          );
        });
    }

    if let Some(flags) = arg.strip_prefix(Self::FLAG_PREFIX) {
      return flags
        .chars()
        .map(|c| {
          return self
            .parse_rules
            .iter()
            .position(|rule| return rule.flag == c)
            .ok_or_else(|| {
              return anyhow!(
                "(ArgError) Invalid flag: `{}`. Use `--help` for more information.",
                c
              );
            });
        })
        .collect();
    }

    return Err(anyhow!(
      "(ArgError) Unexpected argument: `{}`. Use `--help` for more information.",
      arg
    ));
  }

  /// Tokenizes the arguments without the program name.
  pub fn parse<I>(&mut self, args: I) -> Result<&mut Self>
  where
    I: IntoIterator<Item = String>,
  {
    let mut args = args.into_iter().peekable();
    let mut tokens = Vec::new();

    while let Some(arg) = args.next() {
      for index in self.find_parse_rules(&arg)? {
        let rule = &self.parse_rules[index];
        let mut parameters: Vec<String> = Vec::new();

        while let Some(parameter) =
          args.next_if(|p| return !p.starts_with(Self::FLAG_PREFIX))
        {
          parameters.push(parameter);
        }

        if parameters.len() < rule.parameters_min {
          return Err(anyhow!(
            "(ArgError) Not enough parameters for flag: `{}`. Use `--help` for more information.",
            arg
          ));
        } else if parameters.len() > rule.parameters_max {
          return Err(anyhow!(
            "(ArgError) Too many parameters for flag: `{}`. Use `--help` for more information.",
            arg
          ));
        }

        tokens.push(Token::new(
          rule.rule_type,
          rule.arg_type,
          Some(parameters),
        ));
      }
    }

    self.tokens = tokens;

    return Ok(self);
  }

  pub fn evaluate(&mut self) -> Result<()> {
    if self.tokens.is_empty() {
      if let Some(index) = self.default_parse_rule {
        let rule = &self.parse_rules[index];
        let callback = rule.callback;
        let mut token = Token::new(rule.rule_type, rule.arg_type, None);
        return callback(self, &mut token);
      }
    }

    self.tokens.sort_by_key(|token| return token.parse_rule_type);

    for mut token in self.tokens.clone() {
      if let Some(callback) = self
        .parse_rules
        .iter()
        .find(|rule| return rule.arg_type == token.arg_type)
        .map(|rule| return rule.callback)
      {
        callback(self, &mut token)?;
      }
    }

    return Ok(());
  }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
