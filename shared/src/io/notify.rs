////////////////////////////////////////////////////////////////////////////////
// File: src/io/notify.rs
// Description: Notification macros and source position rendering
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use core::fmt;
use std::{
  env,
  fmt::{Display, Formatter},
  time::{SystemTime, UNIX_EPOCH},
};

use owo_colors::{OwoColorize, Stream::Stdout};

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

pub const LOG_LEVEL_ERROR: &str = "Error";
pub const LOG_LEVEL_WARNING: &str = "Warning";
pub const LOG_LEVEL_INFO: &str = "Info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
  Red,
  Yellow,
  Green,
  Cyan,
}

////////////////////////////////////////////////////////////////////////////////
// Color Formatting
////////////////////////////////////////////////////////////////////////////////

#[macro_export]
macro_rules! red {
  ($input:expr, $bold:expr, $underline:expr) => {
    $crate::io::notify::color_fmt(
      $input,
      $crate::io::notify::Color::Red,
      $bold,
      $underline,
    )
  };
}

#[macro_export]
macro_rules! yellow {
  ($input:expr, $bold:expr, $underline:expr) => {
    $crate::io::notify::color_fmt(
      $input,
      $crate::io::notify::Color::Yellow,
      $bold,
      $underline,
    )
  };
}

#[macro_export]
macro_rules! green {
  ($input:expr, $bold:expr, $underline:expr) => {
    $crate::io::notify::color_fmt(
      $input,
      $crate::io::notify::Color::Green,
      $bold,
      $underline,
    )
  };
}

#[macro_export]
macro_rules! cyan {
  ($input:expr, $bold:expr, $underline:expr) => {
    $crate::io::notify::color_fmt(
      $input,
      $crate::io::notify::Color::Cyan,
      $bold,
      $underline,
    )
  };
}

////////////////////////////////////////////////////////////////////////////////
// Message Formatting
////////////////////////////////////////////////////////////////////////////////

#[macro_export]
macro_rules! message_fmt {
  ($severity_symbol:expr, $message_type:expr, $message:tt $(,$arg:expr)*) => {
    format!(
      "[{}] [{}] [{}]: {}",
      $severity_symbol,
      $crate::io::notify::generate_timestamp(),
      $message_type,
      format_args!($message $(,$arg)*)
    )
  };
}

#[macro_export]
macro_rules! error_fmt {
  ($message:tt $(,$arg:expr)*) => {
    $crate::message_fmt![
      $crate::red!["!", true, false],
      $crate::red![$crate::io::notify::LOG_LEVEL_ERROR, true, true],
      $message $(,$arg)*
    ]
  };
}

#[macro_export]
macro_rules! error_println {
  ($message:tt $(,$arg:expr)*) => {
    eprintln!("{}", $crate::error_fmt!($message $(,$arg)*))
  };
}

#[macro_export]
macro_rules! warning_fmt {
  ($message:tt $(,$arg:expr)*) => {
    $crate::message_fmt![
      $crate::yellow!["?", true, false],
      $crate::yellow![$crate::io::notify::LOG_LEVEL_WARNING, true, true],
      $message $(,$arg)*
    ]
  };
}

#[macro_export]
macro_rules! warning_print {
  ($message:tt $(,$arg:expr)*) => {
    println!("{}", $crate::warning_fmt!($message $(,$arg)*))
  };
}

#[macro_export]
macro_rules! info_fmt {
  ($message:tt $(,$arg:expr)*) => {
    $crate::message_fmt![
      $crate::green!["+", true, false],
      $crate::green![$crate::io::notify::LOG_LEVEL_INFO, true, true],
      $message $(,$arg)*
    ]
  };
}

#[macro_export]
macro_rules! info_print {
  ($message:tt $(,$arg:expr)*) => {
    println!("{}", $crate::info_fmt!($message $(,$arg)*))
  };
}

////////////////////////////////////////////////////////////////////////////////
// Source Positions
////////////////////////////////////////////////////////////////////////////////

/// Line/column view of a byte offset into a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
  /// 1-based line number.
  pub line: usize,
  /// 0-based column, counted in characters.
  pub column: usize,
  pub line_content: String,
}

impl Position {
  /// Offsets past the end of `content` are clamped to the end.
  pub fn new(content: &str, pos: usize) -> Self {
    let mut pos = pos.min(content.len());

    while !content.is_char_boundary(pos) {
      pos -= 1;
    }

    let line_start = content[..pos].rfind('\n').map_or(0, |i| return i + 1);
    let line_end = content[pos..]
      .find('\n')
      .map_or(content.len(), |i| return pos + i);

    return Self {
      line: content[..pos].matches('\n').count() + 1,
      column: content[line_start..pos].chars().count(),
      line_content: content[line_start..line_end]
        .trim_end_matches('\r')
        .to_string(),
    };
  }
}

pub struct SourceSnippet<'a> {
  path: &'a str,
  pos: Position,
  message: &'a str,
}

impl<'a> SourceSnippet<'a> {
  pub fn new(path: &'a str, pos: Position, message: &'a str) -> Self {
    return Self { path, pos, message };
  }
}

impl Display for SourceSnippet<'_> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let spacing = " ".repeat(self.pos.line.to_string().len());
    let underline = " ".repeat(self.pos.column) + "^-----";

    return f.write_fmt(format_args!(
      "{s}{arrow} {p}:{l}:{c}\n\
       {s} {pipe}\n\
       {l} {pipe} {line}\n\
       {s} {pipe} {u}\n\
       {s} {pipe}\n\
       {s} {equals} {message}",
      s = spacing,
      p = green!(self.path, false, false),
      l = yellow!(&self.pos.line.to_string(), true, false),
      u = red!(&underline, true, false),
      line = self.pos.line_content,
      c = red!(&(self.pos.column + 1).to_string(), false, false),
      message = self.message,
      arrow = green!("-->", true, false),
      pipe = green!("|", true, false),
      equals = green!("=", true, false)
    ));
  }
}

/// Renders `message` below the source line containing byte offset `pos`.
pub fn file_pos_visualization(
  file_name: &str,
  file_contents: &str,
  pos: usize,
  message: &str,
) -> String {
  let pos = Position::new(file_contents, pos);
  return SourceSnippet::new(file_name, pos, message).to_string();
}

////////////////////////////////////////////////////////////////////////////////
// Helper Functions
////////////////////////////////////////////////////////////////////////////////

/// Wall clock time of day in UTC, `HH:MM:SS`.
pub fn generate_timestamp() -> String {
  let seconds = SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|d| return d.as_secs())
    .unwrap_or_default();

  return format!(
    "{:02}:{:02}:{:02}",
    (seconds / 3600) % 24,
    (seconds / 60) % 60,
    seconds % 60
  );
}

////////////////////////////////////////////////////////////////////////////////
// Color Support
////////////////////////////////////////////////////////////////////////////////

lazy_static::lazy_static! {
  pub(crate) static ref RGB_COLOR_SUPPORT: bool = {
    env::var("COLORTERM")
      .map(|val| return val == "truecolor" || val == "24bit")
      .unwrap_or(false)
  };
}

pub fn color_fmt(
  input: &str,
  color: Color,
  bold: bool,
  underline: bool,
) -> String {
  let mut fmt = if *RGB_COLOR_SUPPORT {
    match color {
      Color::Red => input.fg_rgb::<0xFF, 0x65, 0x78>().to_string(),
      Color::Yellow => input.fg_rgb::<0xEA, 0xCB, 0x64>().to_string(),
      Color::Green => input.fg_rgb::<0x9D, 0xD2, 0x74>().to_string(),
      Color::Cyan => input.fg_rgb::<0x6D, 0xC7, 0xE3>().to_string(),
    }
  } else {
    match color {
      Color::Red => input
        .if_supports_color(Stdout, |t| return t.bright_red())
        .to_string(),
      Color::Yellow => input
        .if_supports_color(Stdout, |t| return t.bright_yellow())
        .to_string(),
      Color::Green => input
        .if_supports_color(Stdout, |t| return t.bright_green())
        .to_string(),
      Color::Cyan => input
        .if_supports_color(Stdout, |t| return t.bright_cyan())
        .to_string(),
    }
  };

  if bold && underline {
    fmt = fmt.bold().underline().to_string();
  } else if bold {
    fmt = fmt.bold().to_string();
  } else if underline {
    fmt = fmt.underline().to_string();
  }

  return fmt;
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
