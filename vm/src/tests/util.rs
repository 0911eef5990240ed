////////////////////////////////////////////////////////////////////////////////
// File: src/tests/util.rs
// Description: Test utility functions and a minimal Hack CPU emulator
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 06.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use std::collections::HashMap;

use crate::internal::{
  compile::build_program,
  error::{TranslateError, TranslateErrorKind},
};

use shared::{
  io::os::FileInfo,
  util::traits::Serializable,
  vm::{VmFile, VmParser},
};

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

pub(super) const SP: usize = 0;
pub(super) const LCL: usize = 1;
pub(super) const ARG: usize = 2;
pub(super) const THIS: usize = 3;
pub(super) const THAT: usize = 4;

const RAM_SIZE: usize = 1 << 16;
const FIRST_VARIABLE: u16 = 16;
const MAX_STEPS: usize = 1_000_000;

////////////////////////////////////////////////////////////////////////////////
// Translation Helpers
////////////////////////////////////////////////////////////////////////////////

pub(super) fn parse_sources(sources: &[(&str, &str)]) -> Vec<VmFile> {
  return sources
    .iter()
    .map(|(name, source)| {
      let file = FileInfo::from_source(name, source).unwrap();
      return VmParser::parse(&file).unwrap();
    })
    .collect();
}

pub(super) fn try_translate(
  sources: &[(&str, &str)],
  bootstrap: bool,
  annotate: bool,
) -> Result<String, TranslateError> {
  let files = parse_sources(sources);
  return build_program("Test", &files, bootstrap, annotate)
    .map(|program| return program.serialize());
}

/// Assembly for `sources`, without bootstrap and ending in a halt loop.
pub(super) fn translate_bare(source: &str) -> String {
  return try_translate(&[("Test.vm", source)], false, false)
    .unwrap_or_else(|error| panic!("translation failed:\n{}", error));
}

pub(super) fn translate_with_init(sources: &[(&str, &str)]) -> String {
  return try_translate(sources, true, false)
    .unwrap_or_else(|error| panic!("translation failed:\n{}", error));
}

pub(super) fn translate_error_kind(source: &str) -> TranslateErrorKind {
  return try_translate(&[("Test.vm", source)], false, false)
    .expect_err("translation should fail")
    .kind;
}

////////////////////////////////////////////////////////////////////////////////
// Hack CPU Emulator
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
enum Op {
  Address(u16),
  Compute {
    dest: String,
    comp: String,
    jump: String,
  },
}

/// Executes Hack assembly until it reaches a `(L) @L 0;JMP` halt loop.
pub(super) struct Emulator {
  ram: Vec<i16>,
  rom: Vec<Op>,
  pc: usize,
  a: i16,
  d: i16,
  steps: usize,
}

impl Emulator {
  /// Assembles `asm`, resolving labels first and then variables from 16 on.
  pub(super) fn new(asm: &str) -> Self {
    let lines = asm
      .lines()
      .map(|line| return line.split("//").next().unwrap_or("").trim())
      .filter(|line| return !line.is_empty())
      .collect::<Vec<&str>>();

    let mut symbols: HashMap<String, u16> = HashMap::from([
      ("SP".to_string(), 0),
      ("LCL".to_string(), 1),
      ("ARG".to_string(), 2),
      ("THIS".to_string(), 3),
      ("THAT".to_string(), 4),
      ("SCREEN".to_string(), 16384),
      ("KBD".to_string(), 24576),
    ]);
    for i in 0..16 {
      symbols.insert(format!("R{}", i), i);
    }

    let mut address = 0;
    for line in lines.iter() {
      if line.starts_with('(') && line.ends_with(')') {
        let label = &line[1..line.len() - 1];
        let previous = symbols.insert(label.to_string(), address);
        assert!(previous.is_none(), "label `{}` defined twice", label);
      } else {
        address += 1;
      }
    }

    let mut next_variable = FIRST_VARIABLE;
    let mut rom = Vec::new();
    for line in lines.iter() {
      if line.starts_with('(') {
        continue;
      }

      if let Some(symbol) = line.strip_prefix('@') {
        let value = match symbol.parse::<u16>() {
          Ok(value) => value,
          Err(_) => *symbols.entry(symbol.to_string()).or_insert_with(|| {
            next_variable += 1;
            return next_variable - 1;
          }),
        };
        rom.push(Op::Address(value));
        continue;
      }

      let (dest, rest) = match line.split_once('=') {
        Some((dest, rest)) => (dest, rest),
        None => ("", *line),
      };
      let (comp, jump) = rest.split_once(';').unwrap_or((rest, ""));
      rom.push(Op::Compute {
        dest: dest.to_string(),
        comp: comp.to_string(),
        jump: jump.to_string(),
      });
    }

    return Self {
      ram: vec![0; RAM_SIZE],
      rom,
      pc: 0,
      a: 0,
      d: 0,
      steps: 0,
    };
  }

  pub(super) fn set(&mut self, address: usize, value: i16) -> &mut Self {
    self.ram[address] = value;
    return self;
  }

  pub(super) fn get(&self, address: usize) -> i16 {
    return self.ram[address];
  }

  fn compute(&self, comp: &str) -> i16 {
    let m = self.ram[self.a as u16 as usize];
    let (y, comp) = if comp.contains('M') {
      (m, comp.replace('M', "A"))
    } else {
      (self.a, comp.to_string())
    };
    let d = self.d;

    return match comp.as_str() {
      "0" => 0,
      "1" => 1,
      "-1" => -1,
      "D" => d,
      "A" => y,
      "!D" => !d,
      "!A" => !y,
      "-D" => d.wrapping_neg(),
      "-A" => y.wrapping_neg(),
      "D+1" => d.wrapping_add(1),
      "A+1" => y.wrapping_add(1),
      "D-1" => d.wrapping_sub(1),
      "A-1" => y.wrapping_sub(1),
      "D+A" | "A+D" => d.wrapping_add(y),
      "D-A" => d.wrapping_sub(y),
      "A-D" => y.wrapping_sub(d),
      "D&A" | "A&D" => d & y,
      "D|A" | "A|D" => d | y,
      _ => panic!("unknown computation `{}`", comp),
    };
  }

  fn jumps(value: i16, jump: &str) -> bool {
    return match jump {
      "" => false,
      "JGT" => value > 0,
      "JEQ" => value == 0,
      "JGE" => value >= 0,
      "JLT" => value < 0,
      "JNE" => value != 0,
      "JLE" => value <= 0,
      "JMP" => true,
      _ => panic!("unknown jump `{}`", jump),
    };
  }

  /// Runs until a halt loop or the end of the program.
  pub(super) fn run(&mut self) -> &mut Self {
    while self.pc < self.rom.len() {
      assert!(self.steps < MAX_STEPS, "program did not halt");
      self.steps += 1;

      match self.rom[self.pc].clone() {
        Op::Address(value) => {
          self.a = value as i16;
          self.pc += 1;
        }
        Op::Compute { dest, comp, jump } => {
          let value = self.compute(&comp);
          let address = self.a as u16 as usize;

          if dest.contains('M') {
            self.ram[address] = value;
          }
          if dest.contains('D') {
            self.d = value;
          }
          if dest.contains('A') {
            self.a = value;
          }

          if Self::jumps(value, &jump) {
            let target = address;
            if jump == "JMP" && target + 1 == self.pc {
              return self;
            }
            self.pc = target;
          } else {
            self.pc += 1;
          }
        }
      }
    }

    return self;
  }
}

/// Runs bare code on a stack at 256 with the given base pointers.
pub(super) fn run_bare(source: &str, bases: [i16; 4]) -> Emulator {
  let asm = translate_bare(source);
  let mut emulator = Emulator::new(&asm);

  emulator
    .set(SP, 256)
    .set(LCL, bases[0])
    .set(ARG, bases[1])
    .set(THIS, bases[2])
    .set(THAT, bases[3])
    .run();

  return emulator;
}
