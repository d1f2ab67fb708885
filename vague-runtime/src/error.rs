//! Runtime error types for the Vague interpreter

use crate::jumps::ScanDirection;
use crate::state::StackLevel;
use thiserror::Error;
use vague_spec::SpecError;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Stack underflow at instruction {ip}: nothing to pop from the {level}")]
    StackUnderflow { ip: usize, level: StackLevel },

    #[error("Jump out of range at instruction {ip}: no matching bracket scanning {direction}")]
    JumpOutOfRange { ip: usize, direction: ScanDirection },

    #[error("Output error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Spec(#[from] SpecError),
}

impl RuntimeError {
    /// Instruction index the error occurred at, if it came from an instruction
    pub fn ip(&self) -> Option<usize> {
        match self {
            RuntimeError::StackUnderflow { ip, .. } | RuntimeError::JumpOutOfRange { ip, .. } => {
                Some(*ip)
            }
            RuntimeError::IoError(_) | RuntimeError::Spec(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
