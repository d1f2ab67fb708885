//! # Vague Runtime
//!
//! Execute Vague programs on a dual-stack virtual machine.
//!
//! The machine has a single accumulator and a stack of value stacks. The
//! addressing mode decides which level `=`/`_` and `>`/`<` act on. Loops
//! are matched at run time by scanning for the matching bracket.
//!
//! ## Features
//!
//! - **Cross-wired stacks**: push/pop and rotate always target opposite levels
//! - **Runtime bracket matching**: optional jump cache with identical behavior
//! - **Discouraged mode**: randomly styled terminal output via crossterm
//! - **Pluggable output**: write to a terminal or capture for inspection
//!
//! ## Example
//!
//! ```rust
//! use vague_runtime::{CapturedOutput, VMConfig, VM};
//! use vague_spec::{Instruction, Program};
//!
//! let program = Program::new(vec![Instruction::Zero, Instruction::Print]).unwrap();
//! let mut vm = VM::new(program, CapturedOutput::new(), VMConfig::default());
//! let result = vm.run().unwrap();
//! assert_eq!(vm.output().text(), "\0");
//! println!("Steps: {}", result.steps);
//! ```

pub mod error;
pub mod execute;
pub mod io;
pub mod jumps;
pub mod render;
pub mod state;
pub mod vm;

pub use error::{Result, RuntimeError};
pub use execute::{execute, Effect};
pub use io::{CapturedOutput, Output, TerminalOutput};
pub use jumps::{JumpResolver, JumpTable, ScanDirection};
pub use render::{Renderer, Style, StyledChar};
pub use state::{ExecutionState, HaltReason, Mode, StackLevel};
pub use vm::{ExecutionResult, VMConfig, VM};

use vague_spec::{Instruction, Program};

/// Simple execution helper
///
/// Runs a program with the default configuration, printing to stdout.
pub fn run(program: Program) -> Result<ExecutionResult> {
    let mut vm = VM::new(program, TerminalOutput::stdout(), VMConfig::default());
    vm.run()
}

/// Check bracket counts and run the instructions, capturing their output
pub fn run_captured(
    instructions: Vec<Instruction>,
    config: VMConfig,
) -> Result<(ExecutionResult, CapturedOutput)> {
    let program = Program::new(instructions)?;
    let mut vm = VM::new(program, CapturedOutput::new(), config);
    let result = vm.run()?;
    Ok((result, vm.into_output()))
}
