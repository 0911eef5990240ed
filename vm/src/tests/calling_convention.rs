////////////////////////////////////////////////////////////////////////////////
// File: src/tests/calling_convention.rs
// Description: Function calls, returns and the bootstrap
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 06.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use super::util::{
  run_bare, translate_bare, translate_with_init, Emulator, ARG, LCL, SP, THAT,
  THIS,
};

const BASES: [i16; 4] = [300, 400, 3000, 3010];

const SUM_MAIN: &str = "function Main.sum 0
push argument 0
push constant 0
eq
if-goto BASE
push argument 0
push argument 0
push constant 1
sub
call Main.sum 1
add
return
label BASE
push constant 0
return";

////////////////////////////////////////////////////////////////////////////////
// Test Cases: Calls Without Bootstrap
////////////////////////////////////////////////////////////////////////////////

#[test]
#[doc = "A call consumes its arguments, leaves one result and restores the frame."]
fn call_leaves_exactly_one_result() {
  for n_args in 0..4 {
    let pushes = (1..=n_args)
      .map(|i| return format!("push constant {}\n", i))
      .collect::<String>();
    let source = format!(
      "{}call Test.f {}
       label DONE
       goto DONE
       function Test.f 2
       push constant 5000
       pop pointer 0
       push constant 6000
       pop pointer 1
       push constant 9
       return",
      pushes, n_args
    );

    let emulator = run_bare(&source, BASES);

    assert_eq!(emulator.get(SP), 257, "stack after call with {} args", n_args);
    assert_eq!(emulator.get(256), 9);
    assert_eq!(emulator.get(LCL), BASES[0]);
    assert_eq!(emulator.get(ARG), BASES[1]);
    assert_eq!(emulator.get(THIS), BASES[2]);
    assert_eq!(emulator.get(THAT), BASES[3]);
  }
}

#[test]
#[doc = "Locals start at zero and arguments are reachable through ARG."]
fn callee_sees_zeroed_locals_and_arguments() {
  let asm = translate_bare(
    "push constant 1
     push constant 2
     push constant 3
     call Test.f 3
     label DONE
     goto DONE
     function Test.f 2
     push local 0
     push local 1
     add
     push argument 0
     add
     push argument 2
     add
     return",
  );

  let mut emulator = Emulator::new(&asm);
  emulator
    .set(SP, 256)
    .set(LCL, 300)
    .set(ARG, 400)
    .set(264, 77)
    .set(265, 88)
    .run();

  assert_eq!(emulator.get(SP), 257);
  assert_eq!(emulator.get(256), 4);
}

#[test]
#[doc = "Each call site emits its own return label."]
fn return_labels_are_unique() {
  let asm = translate_bare(
    "function Test.main 0
     call Test.f 0
     call Test.f 0
     function Test.f 0
     push constant 0
     return",
  );

  assert!(asm.contains("(Test.main$ret.0)"));
  assert!(asm.contains("(Test.main$ret.1)"));
  assert!(asm.contains("@Test.f\n0;JMP\n(Test.main$ret.0)"));
}

////////////////////////////////////////////////////////////////////////////////
// Test Cases: Bootstrap
////////////////////////////////////////////////////////////////////////////////

#[test]
#[doc = "The bootstrap sets SP to 256 and calls Sys.init."]
fn bootstrap_calls_sys_init() {
  let sys = "function Sys.init 0\nlabel HALT\ngoto HALT";
  let asm = translate_with_init(&[("Sys.vm", sys)]);

  assert!(asm.starts_with("// bootstrap\n@256\nD=A\n@SP\nM=D\n"));
  assert!(asm.contains("@Sys.init\n0;JMP\n"));
  assert!(!asm.contains("(END)"));
}

#[test]
#[doc = "A value returned across files lands in the caller's stack top."]
fn call_across_files() {
  let asm = translate_with_init(&[
    (
      "Sys.vm",
      "function Sys.init 0
       push constant 21
       call Main.double 1
       pop static 0
       label HALT
       goto HALT",
    ),
    (
      "Main.vm",
      "function Main.double 1
       push argument 0
       push argument 0
       add
       pop local 0
       push local 0
       return",
    ),
  ]);

  let mut emulator = Emulator::new(&asm);
  emulator.run();

  assert_eq!(emulator.get(16), 42);
  assert_eq!(emulator.get(SP), 261);
  assert_eq!(emulator.get(LCL), 261);
  assert_eq!(emulator.get(ARG), 256);
}

#[test]
#[doc = "Recursive calls unwind correctly and return labels never repeat."]
fn recursion() {
  let asm = translate_with_init(&[
    (
      "Sys.vm",
      "function Sys.init 0
       push constant 10
       call Main.sum 1
       push constant 3
       call Main.sum 1
       add
       pop static 0
       label HALT
       goto HALT",
    ),
    ("Main.vm", SUM_MAIN),
  ]);

  assert!(asm.contains("(Sys.init$ret.1)"));
  assert!(asm.contains("(Sys.init$ret.2)"));
  assert!(asm.contains("(Main.sum$ret.3)"));

  let mut emulator = Emulator::new(&asm);
  emulator.run();

  assert_eq!(emulator.get(16), 61);
  assert_eq!(emulator.get(SP), 261);
}
