//! # Vague Language Specification
//!
//! Core types of the Vague esoteric language: a single accumulator, a stack
//! of value stacks, and seventeen single-character instructions.
//!
//! ## Key Features
//! - 17 instructions, one source character each; every other character is a comment
//! - Values are 32-bit wrapping integers or booleans
//! - Two addressing modes that cross-wire push/pop and rotate onto opposite
//!   levels of the stack of stacks
//! - Bracket loops that repeat while the accumulator is truthy

pub mod error;
pub mod instruction;
pub mod program;
pub mod value;

pub use error::SpecError;
pub use instruction::Instruction;
pub use program::Program;
pub use value::Value;
