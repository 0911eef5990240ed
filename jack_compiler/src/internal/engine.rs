////////////////////////////////////////////////////////////////////////////////
// File: src/internal/engine.rs
// Description: Recursive descent compilation engine
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use std::{iter::Peekable, vec::IntoIter};

use super::{
  error::{CompileError, ErrorKind},
  parse::Program,
  symbols::{SymbolKind, SymbolTable},
  tokenize::{Keyword, Symbol, Token, MAX_INTEGER_CONSTANT},
};

use shared::{
  info_print,
  io::os::FileInfo,
  util::{helpers::Counter, settings::Setting},
  vm::{ArithmeticOp, Instruction, Segment},
};

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

const OS_MULTIPLY: &str = "Math.multiply";
const OS_DIVIDE: &str = "Math.divide";
const OS_ALLOC: &str = "Memory.alloc";
const OS_STRING_NEW: &str = "String.new";
const OS_STRING_APPEND: &str = "String.appendChar";

const LABEL_IF_TRUE: &str = "IF_TRUE";
const LABEL_IF_FALSE: &str = "IF_FALSE";
const LABEL_IF_END: &str = "IF_END";
const LABEL_WHILE_EXP: &str = "WHILE_EXP";
const LABEL_WHILE_END: &str = "WHILE_END";

const THIS_ARGUMENT: &str = "this";

const CLASS_VAR_KEYWORDS: [Keyword; 2] = [Keyword::Static, Keyword::Field];
const SUBROUTINE_KEYWORDS: [Keyword; 3] =
  [Keyword::Constructor, Keyword::Function, Keyword::Method];
const STATEMENT_KEYWORDS: [Keyword; 5] = [
  Keyword::Let,
  Keyword::If,
  Keyword::While,
  Keyword::Do,
  Keyword::Return,
];

pub(crate) type CompileResult<T> = Result<T, CompileError>;

/// Object a qualified or implicit call is made on.
enum CallHead {
  Name(String, usize),
  This,
}

////////////////////////////////////////////////////////////////////////////////
// Compilation Engine
////////////////////////////////////////////////////////////////////////////////

/// Parses one class and emits stack machine instructions as a side effect of
/// each grammar rule, in source order. The first mismatch aborts the class.
pub(crate) struct CompilationEngine<'a> {
  file_info: &'a FileInfo,
  tokens: Peekable<IntoIter<Token>>,
  symbols: SymbolTable,
  class_name: String,
  subroutine_kind: Keyword,
  subroutine_void: bool,
  if_counter: usize,
  while_counter: usize,
  instructions: Vec<Instruction>,
}

impl<'a> CompilationEngine<'a> {
  pub(crate) fn new(file_info: &'a FileInfo, tokens: Vec<Token>) -> Self {
    return Self {
      file_info,
      tokens: tokens.into_iter().peekable(),
      symbols: SymbolTable::new(),
      class_name: String::new(),
      subroutine_kind: Keyword::Function,
      subroutine_void: false,
      if_counter: 0,
      while_counter: 0,
      instructions: Vec::new(),
    };
  }

  //////////////////////////////////////////////////////////////////////////////
  // Token Handling
  //////////////////////////////////////////////////////////////////////////////

  fn error_at(&self, pos: usize, kind: ErrorKind) -> CompileError {
    return CompileError::new(
      &self.file_info.name,
      &self.file_info.content,
      pos,
      kind,
    );
  }

  fn unexpected(&self, expected: &str, found: Option<&Token>) -> CompileError {
    return match found {
      Some(token) => self.error_at(
        token.get_pos(),
        ErrorKind::UnexpectedToken {
          expected: expected.to_string(),
          found: token.to_string(),
        },
      ),
      None => self.error_at(
        self.file_info.content.len(),
        ErrorKind::UnexpectedEndOfFile {
          expected: expected.to_string(),
        },
      ),
    };
  }

  fn advance(&mut self, expected: &str) -> CompileResult<Token> {
    return match self.tokens.next() {
      Some(token) => Ok(token),
      None => Err(self.unexpected(expected, None)),
    };
  }

  fn peek_symbol(&mut self, symbol: Symbol) -> bool {
    let next = self.tokens.peek();
    return matches!(next, Some(Token::Symbol(s, _)) if *s == symbol);
  }

  fn peek_keyword(&mut self, keyword: Keyword) -> bool {
    let next = self.tokens.peek();
    return matches!(next, Some(Token::Keyword(k, _)) if *k == keyword);
  }

  fn peek_keyword_in(&mut self, keywords: &[Keyword]) -> Option<Keyword> {
    return match self.tokens.peek() {
      Some(Token::Keyword(k, _)) if keywords.contains(k) => Some(*k),
      _ => None,
    };
  }

  fn expect_symbol(&mut self, symbol: Symbol) -> CompileResult<usize> {
    let expected = format!("`{}`", symbol);
    return match self.advance(&expected)? {
      Token::Symbol(s, pos) if s == symbol => Ok(pos),
      token => Err(self.unexpected(&expected, Some(&token))),
    };
  }

  fn expect_keyword(&mut self, keyword: Keyword) -> CompileResult<usize> {
    let expected = format!("`{}`", keyword);
    return match self.advance(&expected)? {
      Token::Keyword(k, pos) if k == keyword => Ok(pos),
      token => Err(self.unexpected(&expected, Some(&token))),
    };
  }

  fn expect_identifier(
    &mut self,
    what: &str,
  ) -> CompileResult<(String, usize)> {
    return match self.advance(what)? {
      Token::Identifier(name, pos) => Ok((name, pos)),
      token => Err(self.unexpected(what, Some(&token))),
    };
  }

  fn emit(&mut self, instruction: Instruction) {
    self.instructions.push(instruction);
  }

  //////////////////////////////////////////////////////////////////////////////
  // Symbols
  //////////////////////////////////////////////////////////////////////////////

  fn define(
    &mut self,
    name: &str,
    pos: usize,
    var_type: &str,
    kind: SymbolKind,
  ) -> CompileResult<()> {
    return self
      .symbols
      .define(name, var_type, kind)
      .map(|_| return ())
      .map_err(|kind| return self.error_at(pos, kind));
  }

  fn variable(&self, name: &str, pos: usize) -> CompileResult<(Segment, u16)> {
    let found = (self.symbols.kind_of(name), self.symbols.index_of(name));
    if let (Some(kind), Some(index)) = found {
      return Ok((kind.segment(), index));
    }

    let kind = ErrorKind::UndeclaredVariable(name.to_string());
    return Err(self.error_at(pos, kind));
  }

  fn check_this_allowed(&self, pos: usize) -> CompileResult<()> {
    if self.subroutine_kind == Keyword::Function {
      return Err(self.error_at(pos, ErrorKind::ThisInFunction));
    }
    return Ok(());
  }

  //////////////////////////////////////////////////////////////////////////////
  // Program Structure
  //////////////////////////////////////////////////////////////////////////////

  /// class: 'class' className '{' classVarDec* subroutineDec* '}' EOF
  pub(crate) fn compile_class(mut self) -> CompileResult<Program> {
    self.expect_keyword(Keyword::Class)?;
    let (class_name, _) = self.expect_identifier("class name")?;
    self.class_name = class_name;
    self.expect_symbol(Symbol::LeftCurlyBrace)?;

    while let Some(kind) = self.peek_keyword_in(&CLASS_VAR_KEYWORDS) {
      self.compile_class_var_dec(kind)?;
    }

    while self.peek_keyword_in(&SUBROUTINE_KEYWORDS).is_some() {
      self.compile_subroutine()?;
    }

    self.expect_symbol(Symbol::RightCurlyBrace)?;

    if let Some(token) = self.tokens.next() {
      return Err(self.unexpected("end of file", Some(&token)));
    }

    return Ok(Program {
      class_name: self.class_name,
      instructions: self.instructions,
    });
  }

  /// type: 'int' | 'char' | 'boolean' | className, plus 'void' for returns
  fn compile_type(&mut self, allow_void: bool) -> CompileResult<String> {
    let expected = if allow_void { "return type" } else { "type" };

    return match self.advance(expected)? {
      Token::Keyword(
        keyword @ (Keyword::Int | Keyword::Char | Keyword::Boolean),
        _,
      ) => Ok(keyword.to_string()),
      Token::Keyword(Keyword::Void, _) if allow_void => {
        Ok(Keyword::Void.to_string())
      }
      Token::Identifier(name, _) => Ok(name),
      token => Err(self.unexpected(expected, Some(&token))),
    };
  }

  /// ('static' | 'field') type varName (',' varName)* ';'
  fn compile_class_var_dec(&mut self, keyword: Keyword) -> CompileResult<()> {
    let kind = if keyword == Keyword::Static {
      SymbolKind::Static
    } else {
      SymbolKind::Field
    };

    self.expect_keyword(keyword)?;
    return self.compile_var_names(kind);
  }

  /// 'var' type varName (',' varName)* ';'
  fn compile_var_dec(&mut self) -> CompileResult<()> {
    self.expect_keyword(Keyword::Var)?;
    return self.compile_var_names(SymbolKind::Local);
  }

  fn compile_var_names(&mut self, kind: SymbolKind) -> CompileResult<()> {
    let var_type = self.compile_type(false)?;

    loop {
      let (name, pos) = self.expect_identifier("variable name")?;
      self.define(&name, pos, &var_type, kind)?;

      if !self.peek_symbol(Symbol::Comma) {
        break;
      }
      self.advance("`,`")?;
    }

    self.expect_symbol(Symbol::Semicolon)?;

    return Ok(());
  }

  /// ((type varName) (',' type varName)*)?
  fn compile_parameter_list(&mut self) -> CompileResult<()> {
    if self.peek_symbol(Symbol::RightParen) {
      return Ok(());
    }

    loop {
      let var_type = self.compile_type(false)?;
      let (name, pos) = self.expect_identifier("parameter name")?;
      self.define(&name, pos, &var_type, SymbolKind::Argument)?;

      if !self.peek_symbol(Symbol::Comma) {
        return Ok(());
      }
      self.advance("`,`")?;
    }
  }

  /// ('constructor' | 'function' | 'method') ('void' | type) subroutineName
  /// '(' parameterList ')' '{' varDec* statements '}'
  fn compile_subroutine(&mut self) -> CompileResult<()> {
    let kind = match self.advance("subroutine declaration")? {
      Token::Keyword(
        kind @ (Keyword::Constructor | Keyword::Function | Keyword::Method),
        _,
      ) => kind,
      token => {
        return Err(self.unexpected("subroutine declaration", Some(&token)));
      }
    };

    self.symbols.reset_subroutine();
    self.if_counter = 0;
    self.while_counter = 0;
    self.subroutine_kind = kind;
    self.subroutine_void = self.peek_keyword(Keyword::Void);

    self.compile_type(true)?;
    let (name, _) = self.expect_identifier("subroutine name")?;

    if kind == Keyword::Method {
      let class_name = self.class_name.clone();
      self
        .symbols
        .define(THIS_ARGUMENT, &class_name, SymbolKind::Argument)
        .map_err(|kind| return self.error_at(0, kind))?;
    }

    self.expect_symbol(Symbol::LeftParen)?;
    self.compile_parameter_list()?;
    self.expect_symbol(Symbol::RightParen)?;
    self.expect_symbol(Symbol::LeftCurlyBrace)?;

    while self.peek_keyword(Keyword::Var) {
      self.compile_var_dec()?;
    }

    if Setting::PrintSymbols.is_debug_enabled() {
      info_print!("Symbols of `{}.{}`", self.class_name, name);
      print!("{}", self.symbols);
    }

    self.emit(Instruction::Function(
      format!("{}.{}", self.class_name, name),
      self.symbols.count_of(SymbolKind::Local),
    ));

    match kind {
      Keyword::Constructor => {
        self.emit(Instruction::Push(
          Segment::Constant,
          self.symbols.count_of(SymbolKind::Field),
        ));
        self.emit(Instruction::Call(OS_ALLOC.to_string(), 1));
        self.emit(Instruction::Pop(Segment::Pointer, 0));
      }
      Keyword::Method => {
        self.emit(Instruction::Push(Segment::Argument, 0));
        self.emit(Instruction::Pop(Segment::Pointer, 0));
      }
      _ => {}
    }

    let ends_with_return = self.compile_statements()?;
    self.expect_symbol(Symbol::RightCurlyBrace)?;

    if !ends_with_return {
      self.emit(Instruction::Push(Segment::Constant, 0));
      self.emit(Instruction::Return);
    }

    return Ok(());
  }

  //////////////////////////////////////////////////////////////////////////////
  // Statements
  //////////////////////////////////////////////////////////////////////////////

  /// statement*. Returns whether the last statement was a `return`.
  fn compile_statements(&mut self) -> CompileResult<bool> {
    let mut ends_with_return = false;

    while let Some(keyword) = self.peek_keyword_in(&STATEMENT_KEYWORDS) {
      match keyword {
        Keyword::Let => self.compile_let()?,
        Keyword::If => self.compile_if()?,
        Keyword::While => self.compile_while()?,
        Keyword::Do => self.compile_do()?,
        _ => self.compile_return()?,
      }

      ends_with_return = keyword == Keyword::Return;
    }

    return Ok(ends_with_return);
  }

  /// 'let' varName ('[' expression ']')? '=' expression ';'
  fn compile_let(&mut self) -> CompileResult<()> {
    self.expect_keyword(Keyword::Let)?;
    let (name, pos) = self.expect_identifier("variable name")?;
    let (segment, index) = self.variable(&name, pos)?;

    if self.peek_symbol(Symbol::LeftSquareBracket) {
      self.advance("`[`")?;
      self.compile_expression()?;
      self.expect_symbol(Symbol::RightSquareBracket)?;
      self.emit(Instruction::Push(segment, index));
      self.emit(Instruction::Arithmetic(ArithmeticOp::Add));

      self.expect_symbol(Symbol::Eq)?;
      self.compile_expression()?;
      self.expect_symbol(Symbol::Semicolon)?;

      // The value may itself have used `that`, so the address is bound last
      self.emit(Instruction::Pop(Segment::Temp, 0));
      self.emit(Instruction::Pop(Segment::Pointer, 1));
      self.emit(Instruction::Push(Segment::Temp, 0));
      self.emit(Instruction::Pop(Segment::That, 0));

      return Ok(());
    }

    self.expect_symbol(Symbol::Eq)?;
    self.compile_expression()?;
    self.expect_symbol(Symbol::Semicolon)?;
    self.emit(Instruction::Pop(segment, index));

    return Ok(());
  }

  /// 'if' '(' expression ')' '{' statements '}' ('else' '{' statements '}')?
  fn compile_if(&mut self) -> CompileResult<()> {
    self.expect_keyword(Keyword::If)?;

    let id = self.if_counter.get_value_and_increment();
    let label_true = format!("{}{}", LABEL_IF_TRUE, id);
    let label_false = format!("{}{}", LABEL_IF_FALSE, id);

    self.expect_symbol(Symbol::LeftParen)?;
    self.compile_expression()?;
    self.expect_symbol(Symbol::RightParen)?;

    self.emit(Instruction::IfGoto(label_true.clone()));
    self.emit(Instruction::Goto(label_false.clone()));
    self.emit(Instruction::Label(label_true));

    self.expect_symbol(Symbol::LeftCurlyBrace)?;
    self.compile_statements()?;
    self.expect_symbol(Symbol::RightCurlyBrace)?;

    if !self.peek_keyword(Keyword::Else) {
      self.emit(Instruction::Label(label_false));
      return Ok(());
    }

    let label_end = format!("{}{}", LABEL_IF_END, id);

    self.advance("`else`")?;
    self.emit(Instruction::Goto(label_end.clone()));
    self.emit(Instruction::Label(label_false));

    self.expect_symbol(Symbol::LeftCurlyBrace)?;
    self.compile_statements()?;
    self.expect_symbol(Symbol::RightCurlyBrace)?;

    self.emit(Instruction::Label(label_end));

    return Ok(());
  }

  /// 'while' '(' expression ')' '{' statements '}'
  fn compile_while(&mut self) -> CompileResult<()> {
    self.expect_keyword(Keyword::While)?;

    let id = self.while_counter.get_value_and_increment();
    let label_exp = format!("{}{}", LABEL_WHILE_EXP, id);
    let label_end = format!("{}{}", LABEL_WHILE_END, id);

    self.emit(Instruction::Label(label_exp.clone()));

    self.expect_symbol(Symbol::LeftParen)?;
    self.compile_expression()?;
    self.expect_symbol(Symbol::RightParen)?;

    self.emit(Instruction::Arithmetic(ArithmeticOp::Not));
    self.emit(Instruction::IfGoto(label_end.clone()));

    self.expect_symbol(Symbol::LeftCurlyBrace)?;
    self.compile_statements()?;
    self.expect_symbol(Symbol::RightCurlyBrace)?;

    self.emit(Instruction::Goto(label_exp));
    self.emit(Instruction::Label(label_end));

    return Ok(());
  }

  /// 'do' subroutineCall ';'
  fn compile_do(&mut self) -> CompileResult<()> {
    self.expect_keyword(Keyword::Do)?;

    match self.advance("subroutine call")? {
      Token::Identifier(name, pos) => {
        self.compile_subroutine_call(CallHead::Name(name, pos))?
      }
      Token::Keyword(Keyword::This, pos) => {
        self.check_this_allowed(pos)?;
        self.compile_subroutine_call(CallHead::This)?
      }
      token => return Err(self.unexpected("subroutine call", Some(&token))),
    }

    self.expect_symbol(Symbol::Semicolon)?;
    self.emit(Instruction::Pop(Segment::Temp, 0));

    return Ok(());
  }

  /// 'return' expression? ';'
  fn compile_return(&mut self) -> CompileResult<()> {
    self.expect_keyword(Keyword::Return)?;

    if self.peek_symbol(Symbol::Semicolon) {
      self.emit(Instruction::Push(Segment::Constant, 0));
    } else if self.subroutine_void {
      let found = self.tokens.peek().cloned();
      return Err(self.unexpected("`;`", found.as_ref()));
    } else {
      self.compile_expression()?;
    }

    self.expect_symbol(Symbol::Semicolon)?;
    self.emit(Instruction::Return);

    return Ok(());
  }

  //////////////////////////////////////////////////////////////////////////////
  // Expressions
  //////////////////////////////////////////////////////////////////////////////

  /// term (op term)*, applied strictly left to right
  fn compile_expression(&mut self) -> CompileResult<()> {
    self.compile_term()?;

    loop {
      let op = match self.tokens.peek() {
        Some(Token::Symbol(symbol, _)) if symbol.is_operator() => *symbol,
        _ => return Ok(()),
      };

      self.advance("operator")?;
      self.compile_term()?;

      let instruction = match op {
        Symbol::Plus => Instruction::Arithmetic(ArithmeticOp::Add),
        Symbol::Minus => Instruction::Arithmetic(ArithmeticOp::Sub),
        Symbol::Amp => Instruction::Arithmetic(ArithmeticOp::And),
        Symbol::VBar => Instruction::Arithmetic(ArithmeticOp::Or),
        Symbol::Lt => Instruction::Arithmetic(ArithmeticOp::Lt),
        Symbol::Gt => Instruction::Arithmetic(ArithmeticOp::Gt),
        Symbol::Eq => Instruction::Arithmetic(ArithmeticOp::Eq),
        Symbol::Asterisk => Instruction::Call(OS_MULTIPLY.to_string(), 2),
        _ => Instruction::Call(OS_DIVIDE.to_string(), 2),
      };

      self.emit(instruction);
    }
  }

  fn compile_term(&mut self) -> CompileResult<()> {
    match self.advance("term")? {
      Token::IntegerConstant(value, _) => {
        self.emit(Instruction::Push(Segment::Constant, value));
      }
      Token::StringConstant(value, pos) => self.compile_string(&value, pos)?,
      Token::Keyword(Keyword::True, _) => {
        self.emit(Instruction::Push(Segment::Constant, 0));
        self.emit(Instruction::Arithmetic(ArithmeticOp::Not));
      }
      Token::Keyword(Keyword::False | Keyword::Null, _) => {
        self.emit(Instruction::Push(Segment::Constant, 0));
      }
      Token::Keyword(Keyword::This, pos) => {
        self.check_this_allowed(pos)?;

        if self.peek_symbol(Symbol::Dot) {
          self.compile_subroutine_call(CallHead::This)?;
        } else {
          self.emit(Instruction::Push(Segment::Pointer, 0));
        }
      }
      Token::Identifier(name, pos) => {
        if self.peek_symbol(Symbol::LeftSquareBracket) {
          let (segment, index) = self.variable(&name, pos)?;

          self.advance("`[`")?;
          self.compile_expression()?;
          self.expect_symbol(Symbol::RightSquareBracket)?;

          self.emit(Instruction::Push(segment, index));
          self.emit(Instruction::Arithmetic(ArithmeticOp::Add));
          self.emit(Instruction::Pop(Segment::Pointer, 1));
          self.emit(Instruction::Push(Segment::That, 0));
        } else if self.peek_symbol(Symbol::LeftParen)
          || self.peek_symbol(Symbol::Dot)
        {
          self.compile_subroutine_call(CallHead::Name(name, pos))?;
        } else {
          let (segment, index) = self.variable(&name, pos)?;
          self.emit(Instruction::Push(segment, index));
        }
      }
      Token::Symbol(Symbol::LeftParen, _) => {
        self.compile_expression()?;
        self.expect_symbol(Symbol::RightParen)?;
      }
      Token::Symbol(Symbol::Minus, _) => {
        self.compile_term()?;
        self.emit(Instruction::Arithmetic(ArithmeticOp::Neg));
      }
      Token::Symbol(Symbol::Tilde, _) => {
        self.compile_term()?;
        self.emit(Instruction::Arithmetic(ArithmeticOp::Not));
      }
      token => return Err(self.unexpected("term", Some(&token))),
    }

    return Ok(());
  }

  /// Builds the string at runtime, one UTF-16 code unit per character. Both
  /// the length and every unit must be a valid integer constant.
  fn compile_string(&mut self, value: &str, pos: usize) -> CompileResult<()> {
    let units = value.encode_utf16().collect::<Vec<u16>>();

    let length = match u16::try_from(units.len()) {
      Ok(length) if length <= MAX_INTEGER_CONSTANT => length,
      _ => {
        let kind = ErrorKind::StringTooLong(units.len());
        return Err(self.error_at(pos, kind));
      }
    };

    let max_unit = u32::from(MAX_INTEGER_CONSTANT);
    if let Some(c) = value.chars().find(|c| return u32::from(*c) > max_unit) {
      return Err(self.error_at(pos, ErrorKind::UnsupportedCharacter(c)));
    }

    self.emit(Instruction::Push(Segment::Constant, length));
    self.emit(Instruction::Call(OS_STRING_NEW.to_string(), 1));

    for unit in units {
      self.emit(Instruction::Push(Segment::Constant, unit));
      self.emit(Instruction::Call(OS_STRING_APPEND.to_string(), 2));
    }

    return Ok(());
  }

  /// The head token has been consumed. A declared variable before `.` is the
  /// receiver of a method call, any other name before `.` names a class, and
  /// a bare `name(...)` or `this.name(...)` calls a method on `pointer 0`.
  fn compile_subroutine_call(&mut self, head: CallHead) -> CompileResult<()> {
    let (target, implicit_args) = match head {
      CallHead::Name(name, _) if self.peek_symbol(Symbol::LeftParen) => {
        self.emit(Instruction::Push(Segment::Pointer, 0));
        (format!("{}.{}", self.class_name, name), 1)
      }
      head => {
        self.expect_symbol(Symbol::Dot)?;
        let (member, _) = self.expect_identifier("subroutine name")?;

        match head {
          CallHead::This => {
            self.emit(Instruction::Push(Segment::Pointer, 0));
            (format!("{}.{}", self.class_name, member), 1)
          }
          CallHead::Name(name, pos) => match self.symbols.type_of(&name) {
            Some(class_name) => {
              let target = format!("{}.{}", class_name, member);
              let (segment, index) = self.variable(&name, pos)?;
              self.emit(Instruction::Push(segment, index));
              (target, 1)
            }
            None => (format!("{}.{}", name, member), 0),
          },
        }
      }
    };

    self.expect_symbol(Symbol::LeftParen)?;
    let n_args = self.compile_expression_list()?;
    self.expect_symbol(Symbol::RightParen)?;

    self.emit(Instruction::Call(target, n_args + implicit_args));

    return Ok(());
  }

  /// (expression (',' expression)*)?
  fn compile_expression_list(&mut self) -> CompileResult<u16> {
    if self.peek_symbol(Symbol::RightParen) {
      return Ok(0);
    }

    let mut count: u16 = 1;
    self.compile_expression()?;

    while self.peek_symbol(Symbol::Comma) {
      self.advance("`,`")?;
      self.compile_expression()?;
      count += 1;
    }

    return Ok(count);
  }
}
