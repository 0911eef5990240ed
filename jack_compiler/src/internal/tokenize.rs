////////////////////////////////////////////////////////////////////////////////
// File: src/internal/tokenize.rs
// Description: Token definitions and tokenizer
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use std::{fmt::Display, iter::Peekable, str::CharIndices};

use shared::io::os::FileInfo;

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

// Keywords
pub(crate) const KEYWORD_BOOLEAN: &str = "boolean";
pub(crate) const KEYWORD_CHAR: &str = "char";
pub(crate) const KEYWORD_CLASS: &str = "class";
pub(crate) const KEYWORD_CONSTRUCTOR: &str = "constructor";
pub(crate) const KEYWORD_DO: &str = "do";
pub(crate) const KEYWORD_ELSE: &str = "else";
pub(crate) const KEYWORD_FALSE: &str = "false";
pub(crate) const KEYWORD_FIELD: &str = "field";
pub(crate) const KEYWORD_FUNCTION: &str = "function";
pub(crate) const KEYWORD_IF: &str = "if";
pub(crate) const KEYWORD_INT: &str = "int";
pub(crate) const KEYWORD_LET: &str = "let";
pub(crate) const KEYWORD_METHOD: &str = "method";
pub(crate) const KEYWORD_NULL: &str = "null";
pub(crate) const KEYWORD_RETURN: &str = "return";
pub(crate) const KEYWORD_STATIC: &str = "static";
pub(crate) const KEYWORD_THIS: &str = "this";
pub(crate) const KEYWORD_TRUE: &str = "true";
pub(crate) const KEYWORD_VAR: &str = "var";
pub(crate) const KEYWORD_VOID: &str = "void";
pub(crate) const KEYWORD_WHILE: &str = "while";

// Symbols
pub(crate) const SYMBOL_AMPERSAND: char = '&';
pub(crate) const SYMBOL_ASTERISK: char = '*';
pub(crate) const SYMBOL_COMMA: char = ',';
pub(crate) const SYMBOL_DBL_QUOTE: char = '"';
pub(crate) const SYMBOL_DOT: char = '.';
pub(crate) const SYMBOL_EQUAL: char = '=';
pub(crate) const SYMBOL_GREATER_THAN: char = '>';
pub(crate) const SYMBOL_LEFT_CURLY_BRACE: char = '{';
pub(crate) const SYMBOL_LEFT_PAREN: char = '(';
pub(crate) const SYMBOL_LEFT_SQUARE_BRACKET: char = '[';
pub(crate) const SYMBOL_LESS_THAN: char = '<';
pub(crate) const SYMBOL_MINUS: char = '-';
pub(crate) const SYMBOL_PLUS: char = '+';
pub(crate) const SYMBOL_RIGHT_CURLY_BRACE: char = '}';
pub(crate) const SYMBOL_RIGHT_PAREN: char = ')';
pub(crate) const SYMBOL_RIGHT_SQUARE_BRACKET: char = ']';
pub(crate) const SYMBOL_SEMICOLON: char = ';';
pub(crate) const SYMBOL_SLASH: char = '/';
pub(crate) const SYMBOL_TILDE: char = '~';
pub(crate) const SYMBOL_VERTICAL_BAR: char = '|';

/// Largest integer constant the target word can represent.
pub(crate) const MAX_INTEGER_CONSTANT: u16 = 32767;

////////////////////////////////////////////////////////////////////////////////
// Tokens, Keywords, and Symbols
////////////////////////////////////////////////////////////////////////////////

/// A classified lexical unit together with its byte offset in the source.
#[derive(Debug, Clone)]
pub(crate) enum Token {
  Identifier(String, usize),
  IntegerConstant(u16, usize),
  Keyword(Keyword, usize),
  StringConstant(String, usize),
  Symbol(Symbol, usize),
}

impl Token {
  pub(crate) fn get_pos(&self) -> usize {
    return match self {
      Token::Identifier(_, pos) => *pos,
      Token::IntegerConstant(_, pos) => *pos,
      Token::Keyword(_, pos) => *pos,
      Token::StringConstant(_, pos) => *pos,
      Token::Symbol(_, pos) => *pos,
    };
  }
}

/// Positions are not part of a token's identity.
impl PartialEq for Token {
  fn eq(&self, other: &Self) -> bool {
    return match (self, other) {
      (Token::Identifier(id1, _), Token::Identifier(id2, _)) => id1 == id2,
      (Token::IntegerConstant(num1, _), Token::IntegerConstant(num2, _)) => {
        num1 == num2
      }
      (Token::Keyword(kw1, _), Token::Keyword(kw2, _)) => kw1 == kw2,
      (Token::StringConstant(str1, _), Token::StringConstant(str2, _)) => {
        str1 == str2
      }
      (Token::Symbol(sym1, _), Token::Symbol(sym2, _)) => sym1 == sym2,
      _ => false,
    };
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return match self {
      Token::Identifier(id, _) => write!(f, "identifier `{}`", id),
      Token::IntegerConstant(num, _) => write!(f, "integer constant `{}`", num),
      Token::Keyword(kw, _) => write!(f, "keyword `{}`", kw),
      Token::StringConstant(str, _) => write!(f, "string constant \"{}\"", str),
      Token::Symbol(sym, _) => write!(f, "symbol `{}`", sym),
    };
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keyword {
  Boolean,
  Char,
  Class,
  Constructor,
  Do,
  Else,
  False,
  Field,
  Function,
  If,
  Int,
  Let,
  Method,
  Null,
  Return,
  Static,
  This,
  True,
  Var,
  Void,
  While,
}

impl Keyword {
  pub(crate) fn from_word(word: &str) -> Option<Self> {
    return match word {
      KEYWORD_BOOLEAN => Some(Keyword::Boolean),
      KEYWORD_CHAR => Some(Keyword::Char),
      KEYWORD_CLASS => Some(Keyword::Class),
      KEYWORD_CONSTRUCTOR => Some(Keyword::Constructor),
      KEYWORD_DO => Some(Keyword::Do),
      KEYWORD_ELSE => Some(Keyword::Else),
      KEYWORD_FALSE => Some(Keyword::False),
      KEYWORD_FIELD => Some(Keyword::Field),
      KEYWORD_FUNCTION => Some(Keyword::Function),
      KEYWORD_IF => Some(Keyword::If),
      KEYWORD_INT => Some(Keyword::Int),
      KEYWORD_LET => Some(Keyword::Let),
      KEYWORD_METHOD => Some(Keyword::Method),
      KEYWORD_NULL => Some(Keyword::Null),
      KEYWORD_RETURN => Some(Keyword::Return),
      KEYWORD_STATIC => Some(Keyword::Static),
      KEYWORD_THIS => Some(Keyword::This),
      KEYWORD_TRUE => Some(Keyword::True),
      KEYWORD_VAR => Some(Keyword::Var),
      KEYWORD_VOID => Some(Keyword::Void),
      KEYWORD_WHILE => Some(Keyword::While),
      _ => None,
    };
  }

  pub(crate) fn as_str(&self) -> &'static str {
    return match self {
      Keyword::Boolean => KEYWORD_BOOLEAN,
      Keyword::Char => KEYWORD_CHAR,
      Keyword::Class => KEYWORD_CLASS,
      Keyword::Constructor => KEYWORD_CONSTRUCTOR,
      Keyword::Do => KEYWORD_DO,
      Keyword::Else => KEYWORD_ELSE,
      Keyword::False => KEYWORD_FALSE,
      Keyword::Field => KEYWORD_FIELD,
      Keyword::Function => KEYWORD_FUNCTION,
      Keyword::If => KEYWORD_IF,
      Keyword::Int => KEYWORD_INT,
      Keyword::Let => KEYWORD_LET,
      Keyword::Method => KEYWORD_METHOD,
      Keyword::Null => KEYWORD_NULL,
      Keyword::Return => KEYWORD_RETURN,
      Keyword::Static => KEYWORD_STATIC,
      Keyword::This => KEYWORD_THIS,
      Keyword::True => KEYWORD_TRUE,
      Keyword::Var => KEYWORD_VAR,
      Keyword::Void => KEYWORD_VOID,
      Keyword::While => KEYWORD_WHILE,
    };
  }
}

impl Display for Keyword {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return f.write_str(self.as_str());
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Symbol {
  Amp,
  Asterisk,
  Comma,
  Dot,
  Eq,
  Gt,
  LeftCurlyBrace,
  LeftParen,
  LeftSquareBracket,
  Lt,
  Minus,
  Plus,
  RightCurlyBrace,
  RightParen,
  RightSquareBracket,
  Semicolon,
  Slash,
  Tilde,
  VBar,
}

impl Symbol {
  pub(crate) fn from_char(c: char) -> Option<Self> {
    return match c {
      SYMBOL_AMPERSAND => Some(Symbol::Amp),
      SYMBOL_ASTERISK => Some(Symbol::Asterisk),
      SYMBOL_COMMA => Some(Symbol::Comma),
      SYMBOL_DOT => Some(Symbol::Dot),
      SYMBOL_EQUAL => Some(Symbol::Eq),
      SYMBOL_GREATER_THAN => Some(Symbol::Gt),
      SYMBOL_LEFT_CURLY_BRACE => Some(Symbol::LeftCurlyBrace),
      SYMBOL_LEFT_PAREN => Some(Symbol::LeftParen),
      SYMBOL_LEFT_SQUARE_BRACKET => Some(Symbol::LeftSquareBracket),
      SYMBOL_LESS_THAN => Some(Symbol::Lt),
      SYMBOL_MINUS => Some(Symbol::Minus),
      SYMBOL_PLUS => Some(Symbol::Plus),
      SYMBOL_RIGHT_CURLY_BRACE => Some(Symbol::RightCurlyBrace),
      SYMBOL_RIGHT_PAREN => Some(Symbol::RightParen),
      SYMBOL_RIGHT_SQUARE_BRACKET => Some(Symbol::RightSquareBracket),
      SYMBOL_SEMICOLON => Some(Symbol::Semicolon),
      SYMBOL_SLASH => Some(Symbol::Slash),
      SYMBOL_TILDE => Some(Symbol::Tilde),
      SYMBOL_VERTICAL_BAR => Some(Symbol::VBar),
      _ => None,
    };
  }

  pub(crate) fn as_char(&self) -> char {
    return match self {
      Symbol::Amp => SYMBOL_AMPERSAND,
      Symbol::Asterisk => SYMBOL_ASTERISK,
      Symbol::Comma => SYMBOL_COMMA,
      Symbol::Dot => SYMBOL_DOT,
      Symbol::Eq => SYMBOL_EQUAL,
      Symbol::Gt => SYMBOL_GREATER_THAN,
      Symbol::LeftCurlyBrace => SYMBOL_LEFT_CURLY_BRACE,
      Symbol::LeftParen => SYMBOL_LEFT_PAREN,
      Symbol::LeftSquareBracket => SYMBOL_LEFT_SQUARE_BRACKET,
      Symbol::Lt => SYMBOL_LESS_THAN,
      Symbol::Minus => SYMBOL_MINUS,
      Symbol::Plus => SYMBOL_PLUS,
      Symbol::RightCurlyBrace => SYMBOL_RIGHT_CURLY_BRACE,
      Symbol::RightParen => SYMBOL_RIGHT_PAREN,
      Symbol::RightSquareBracket => SYMBOL_RIGHT_SQUARE_BRACKET,
      Symbol::Semicolon => SYMBOL_SEMICOLON,
      Symbol::Slash => SYMBOL_SLASH,
      Symbol::Tilde => SYMBOL_TILDE,
      Symbol::VBar => SYMBOL_VERTICAL_BAR,
    };
  }

  pub(crate) fn is_operator(&self) -> bool {
    return matches!(
      self,
      Symbol::Asterisk
        | Symbol::Eq
        | Symbol::Gt
        | Symbol::Lt
        | Symbol::Minus
        | Symbol::Plus
        | Symbol::Slash
        | Symbol::VBar
        | Symbol::Amp
    );
  }
}

impl Display for Symbol {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return write!(f, "{}", self.as_char());
  }
}

////////////////////////////////////////////////////////////////////////////////
// Tokenizer
////////////////////////////////////////////////////////////////////////////////

/// Lazily splits a source file into tokens. Comments and whitespace are
/// skipped; no input is ever rejected, unknown characters end up in
/// identifiers.
#[derive(Clone, Debug)]
pub(crate) struct Tokenizer<'a> {
  content: &'a str,
  chars: Peekable<CharIndices<'a>>,
}

impl<'a> Tokenizer<'a> {
  pub(crate) fn new(file_info: &'a FileInfo) -> Self {
    return Self::from_source(&file_info.content);
  }

  pub(crate) fn from_source(content: &'a str) -> Self {
    return Self {
      content,
      chars: content.char_indices().peekable(),
    };
  }

  /// `//` runs to the end of the line, `/*` to the first `*/`. Either one
  /// left open runs to the end of the input.
  fn skip_comment(&mut self, block: bool) {
    if !block {
      while self.chars.next_if(|&(_, c)| return c != '\n').is_some() {}
      return;
    }

    // Skip the `*` of the opening `/*` so that `/*/` does not close itself
    self.chars.next();

    while let Some((_, c)) = self.chars.next() {
      if c != SYMBOL_ASTERISK {
        continue;
      }
      let closing = self.chars.next_if(|&(_, c)| return c == SYMBOL_SLASH);
      if closing.is_some() {
        return;
      }
    }
  }

  fn parse_string(&mut self, start_pos: usize) -> Token {
    let content_start = start_pos + SYMBOL_DBL_QUOTE.len_utf8();
    let mut content_end = self.content.len();

    for (i, c) in self.chars.by_ref() {
      if c == SYMBOL_DBL_QUOTE {
        content_end = i;
        break;
      }
    }

    return Token::StringConstant(
      self.content[content_start..content_end].to_string(),
      start_pos,
    );
  }

  fn is_separator(c: char) -> bool {
    return c.is_whitespace()
      || c == SYMBOL_DBL_QUOTE
      || Symbol::from_char(c).is_some();
  }

  fn parse_word(&mut self, start_pos: usize) -> Token {
    let mut end_pos = self.content.len();

    while let Some(&(i, c)) = self.chars.peek() {
      if Self::is_separator(c) {
        end_pos = i;
        break;
      }
      self.chars.next();
    }

    let word = &self.content[start_pos..end_pos];

    if let Some(keyword) = Keyword::from_word(word) {
      return Token::Keyword(keyword, start_pos);
    }

    if word.chars().all(|c| return c.is_ascii_digit()) {
      if let Some(number) = word
        .parse::<u16>()
        .ok()
        .filter(|n| return *n <= MAX_INTEGER_CONSTANT)
      {
        return Token::IntegerConstant(number, start_pos);
      }
    }

    return Token::Identifier(word.to_string(), start_pos);
  }
}

impl<'a> Iterator for Tokenizer<'a> {
  type Item = Token;

  fn next(&mut self) -> Option<Self::Item> {
    while let Some((pos, c)) = self.chars.next() {
      if c.is_whitespace() {
        continue;
      }

      if c == SYMBOL_SLASH {
        match self.chars.peek() {
          Some(&(_, SYMBOL_SLASH)) => {
            self.skip_comment(false);
            continue;
          }
          Some(&(_, SYMBOL_ASTERISK)) => {
            self.skip_comment(true);
            continue;
          }
          _ => {}
        }
      }

      if c == SYMBOL_DBL_QUOTE {
        return Some(self.parse_string(pos));
      }

      if let Some(symbol) = Symbol::from_char(c) {
        return Some(Token::Symbol(symbol, pos));
      }

      return Some(self.parse_word(pos));
    }

    return None;
  }
}
