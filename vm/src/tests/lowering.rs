////////////////////////////////////////////////////////////////////////////////
// File: src/tests/lowering.rs
// Description: Lowering of single instructions
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 06.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use crate::internal::error::TranslateErrorKind;

use super::util::{
  run_bare, translate_bare, translate_error_kind, try_translate, Emulator, SP,
  THAT, THIS,
};

const BASES: [i16; 4] = [300, 400, 3000, 3010];

////////////////////////////////////////////////////////////////////////////////
// Test Cases: Arithmetic
////////////////////////////////////////////////////////////////////////////////

#[test]
#[doc = "Binary operators take x from below y and leave one result."]
fn binary_operators() {
  for (op, x, y, expected) in [
    ("add", 7, 8, 15),
    ("sub", 10, 3, 7),
    ("sub", 3, 10, -7),
    ("and", 12, 10, 8),
    ("or", 12, 10, 14),
  ] {
    let source = format!("push constant {}\npush constant {}\n{}", x, y, op);
    let emulator = run_bare(&source, BASES);

    assert_eq!(emulator.get(SP), 257, "`{}` leaves one value", op);
    assert_eq!(emulator.get(256), expected, "`{} {} {}`", x, op, y);
  }
}

#[test]
#[doc = "Unary operators replace the top of the stack."]
fn unary_operators() {
  let emulator = run_bare(
    "push constant 5\nneg\npush constant 0\nnot\npush constant 9\nneg\nnot",
    BASES,
  );

  assert_eq!(emulator.get(SP), 259);
  assert_eq!(emulator.get(256), -5);
  assert_eq!(emulator.get(257), -1);
  assert_eq!(emulator.get(258), 8);
}

#[test]
#[doc = "Comparisons push -1 for true and 0 for false."]
fn comparisons() {
  for (op, x, y, expected) in [
    ("eq", 17, 17, -1),
    ("eq", 17, 16, 0),
    ("lt", 892, 891, 0),
    ("lt", 891, 892, -1),
    ("gt", 32767, 32766, -1),
    ("gt", 32766, 32767, 0),
  ] {
    let source = format!("push constant {}\npush constant {}\n{}", x, y, op);
    let emulator = run_bare(&source, BASES);

    assert_eq!(emulator.get(SP), 257);
    assert_eq!(emulator.get(256), expected, "`{} {} {}`", x, op, y);
  }
}

#[test]
#[doc = "Every comparison gets its own pair of labels."]
fn comparison_labels_are_unique() {
  let asm = translate_bare(
    "push constant 1\npush constant 2\nlt\npush constant 3\nlt\npush constant 4\neq",
  );

  assert!(asm.contains("(__JLT_TRUE_Test_0)"));
  assert!(asm.contains("(__JLT_TRUE_Test_1)"));
  assert!(asm.contains("(__JEQ_TRUE_Test_2)"));

  // Assembling fails on a duplicate label
  let mut emulator = Emulator::new(&asm);
  emulator.set(SP, 256).run();
  assert_eq!(emulator.get(256), 0);
}

////////////////////////////////////////////////////////////////////////////////
// Test Cases: Segments
////////////////////////////////////////////////////////////////////////////////

#[test]
#[doc = "Base pointer segments, temp and constants address the right words."]
fn segment_addressing() {
  let emulator = run_bare(
    "push constant 10
     pop local 0
     push constant 21
     pop argument 2
     push constant 36
     pop this 6
     push constant 42
     pop that 5
     push constant 510
     pop temp 6
     push local 0
     push that 5
     add
     push argument 2
     sub
     push this 6
     push this 6
     add
     sub
     push temp 6
     add",
    BASES,
  );

  assert_eq!(emulator.get(300), 10);
  assert_eq!(emulator.get(402), 21);
  assert_eq!(emulator.get(3006), 36);
  assert_eq!(emulator.get(3015), 42);
  assert_eq!(emulator.get(11), 510);
  assert_eq!(emulator.get(SP), 257);
  assert_eq!(emulator.get(256), 469);
}

#[test]
#[doc = "`pointer 0/1` alias THIS and THAT themselves."]
fn pointer_segment() {
  let emulator = run_bare(
    "push constant 3030
     pop pointer 0
     push constant 3040
     pop pointer 1
     push constant 32
     pop this 2
     push constant 46
     pop that 6
     push pointer 0
     push pointer 1
     add
     push this 2
     sub
     push that 6
     add",
    BASES,
  );

  assert_eq!(emulator.get(THIS), 3030);
  assert_eq!(emulator.get(THAT), 3040);
  assert_eq!(emulator.get(3032), 32);
  assert_eq!(emulator.get(3046), 46);
  assert_eq!(emulator.get(256), 6084);
}

#[test]
#[doc = "Statics are qualified by file, so equal indices never collide."]
fn statics_are_per_file() {
  let asm = try_translate(
    &[
      ("A.vm", "push constant 11\npop static 0"),
      ("B.vm", "push constant 22\npop static 0\npush static 0"),
    ],
    false,
    false,
  )
  .unwrap();

  assert!(asm.contains("@A.0"));
  assert!(asm.contains("@B.0"));

  let mut emulator = Emulator::new(&asm);
  emulator.set(SP, 256).run();

  assert_eq!(emulator.get(16), 11);
  assert_eq!(emulator.get(17), 22);
  assert_eq!(emulator.get(256), 22);
}

////////////////////////////////////////////////////////////////////////////////
// Test Cases: Branching
////////////////////////////////////////////////////////////////////////////////

#[test]
#[doc = "`if-goto` pops its condition and loops run to completion."]
fn loop_with_if_goto() {
  // Sums 1..=5 into local 0
  let emulator = run_bare(
    "push constant 0
     pop local 0
     push constant 5
     pop local 1
     label LOOP
     push local 0
     push local 1
     add
     pop local 0
     push local 1
     push constant 1
     sub
     pop local 1
     push local 1
     if-goto LOOP
     push local 0",
    BASES,
  );

  assert_eq!(emulator.get(300), 15);
  assert_eq!(emulator.get(301), 0);
  assert_eq!(emulator.get(SP), 257);
  assert_eq!(emulator.get(256), 15);
}

#[test]
#[doc = "Labels are qualified by their enclosing function."]
fn labels_are_qualified() {
  let asm = translate_bare(
    "function Main.loop 0
     label LOOP
     goto LOOP
     function Main.other 0
     label LOOP
     if-goto LOOP",
  );

  assert!(asm.contains("(Main.loop$LOOP)\n@Main.loop$LOOP\n0;JMP\n"));
  assert!(asm.contains("(Main.other$LOOP)"));
  assert!(asm.contains("@Main.other$LOOP\nD;JNE\n"));
}

////////////////////////////////////////////////////////////////////////////////
// Test Cases: Output Shape
////////////////////////////////////////////////////////////////////////////////

#[test]
#[doc = "Without bootstrap the program ends in a halt loop."]
fn bare_program_ends_in_halt_loop() {
  let asm = translate_bare("push constant 1");

  assert!(!asm.contains("Sys.init"));
  assert!(asm.ends_with("(END)\n@END\n0;JMP\n"));
}

#[test]
#[doc = "Annotation adds the VM instruction as a comment."]
fn annotation_comments() {
  let asm = try_translate(&[("Test.vm", "push constant 7\nadd")], false, true)
    .unwrap();

  assert!(asm.contains("// push constant 7\n@7\nD=A\n"));
  assert!(asm.contains("// add\n"));

  let plain = translate_bare("push constant 7\nadd");
  assert!(!plain.contains("// push"));
}

////////////////////////////////////////////////////////////////////////////////
// Test Cases: Errors
////////////////////////////////////////////////////////////////////////////////

#[test]
#[doc = "Instructions without a Hack lowering are rejected."]
fn rejects_untranslatable_instructions() {
  assert_eq!(
    translate_error_kind("push constant 1\npop constant 0"),
    TranslateErrorKind::PopConstant
  );
  assert_eq!(
    translate_error_kind("push pointer 2"),
    TranslateErrorKind::PointerIndex(2)
  );
  assert_eq!(
    translate_error_kind("pop temp 8"),
    TranslateErrorKind::TempIndex(8)
  );
  assert_eq!(
    translate_error_kind("push constant 40000"),
    TranslateErrorKind::ConstantOutOfRange(40000)
  );
}

#[test]
#[doc = "A translation error names the file, the function and the instruction."]
fn error_names_its_location() {
  let error = try_translate(
    &[("Test.vm", "function Main.f 0\npush pointer 5")],
    false,
    false,
  )
  .unwrap_err();

  let message = error.to_string();
  assert!(message.starts_with("(TranslateError)"));
  assert!(message.contains("Test.vm"));
  assert!(message.contains("Main.f"));
  assert!(message.contains("push pointer 5"));
}
