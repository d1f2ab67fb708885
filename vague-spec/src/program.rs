//! # Program Structure for Vague
//!
//! A program is an immutable instruction sequence whose loop brackets are
//! balanced in count. Nesting order is deliberately not validated here: a
//! program such as `)(` loads fine and faults only if the interpreter has to
//! jump across it.

use crate::error::{Result, SpecError};
use crate::instruction::Instruction;
use std::fmt;

/// A validated Vague program
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Create a program, checking that `(` and `)` occur equally often
    pub fn new(instructions: Vec<Instruction>) -> Result<Self> {
        let (opens, closes) = bracket_counts(&instructions);
        if opens != closes {
            return Err(SpecError::MalformedProgram { opens, closes });
        }
        Ok(Self { instructions })
    }

    /// Instruction sequence
    #[inline]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Instruction at `ip`, if any
    #[inline]
    pub fn get(&self, ip: usize) -> Option<Instruction> {
        self.instructions.get(ip).copied()
    }

    /// Number of instructions
    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if the program has no instructions
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of loops (pairs of brackets)
    pub fn loop_count(&self) -> usize {
        bracket_counts(&self.instructions).0
    }
}

/// Count `(` and `)` in an instruction sequence
fn bracket_counts(instructions: &[Instruction]) -> (usize, usize) {
    instructions.iter().fold((0, 0), |(opens, closes), inst| match inst {
        Instruction::LoopStart => (opens + 1, closes),
        Instruction::LoopEnd => (opens, closes + 1),
        _ => (opens, closes),
    })
}

impl fmt::Display for Program {
    /// Canonical source: one character per instruction
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for inst in &self.instructions {
            write!(f, "{}", inst)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Instruction::*;

    #[test]
    fn test_empty_program() {
        let program = Program::new(vec![]).unwrap();
        assert!(program.is_empty());
        assert_eq!(program.len(), 0);
        assert_eq!(program.get(0), None);
        assert_eq!(program.to_string(), "");
    }

    #[test]
    fn test_balanced_program() {
        let program = Program::new(vec![Decrement, LoopStart, Decrement, LoopEnd]).unwrap();
        assert_eq!(program.len(), 4);
        assert_eq!(program.get(1), Some(LoopStart));
        assert_eq!(program.loop_count(), 1);
        assert_eq!(program.to_string(), "-(-)");
    }

    #[test]
    fn test_unbalanced_open() {
        let err = Program::new(vec![LoopStart]).unwrap_err();
        assert_eq!(err, SpecError::MalformedProgram { opens: 1, closes: 0 });
    }

    #[test]
    fn test_unbalanced_close() {
        let err = Program::new(vec![LoopEnd, LoopEnd, LoopStart]).unwrap_err();
        assert_eq!(err, SpecError::MalformedProgram { opens: 1, closes: 2 });
    }

    #[test]
    fn test_misnested_is_accepted() {
        // Only the counts are checked at load time
        let program = Program::new(vec![LoopEnd, LoopStart]).unwrap();
        assert_eq!(program.to_string(), ")(");
    }

    #[test]
    fn test_iterate() {
        let program = Program::new(vec![True, Print]).unwrap();
        let collected: Vec<Instruction> = program.into_iter().copied().collect();
        assert_eq!(collected, vec![True, Print]);
    }
}
