//! Loop bracket matching
//!
//! Brackets are matched by scanning from the jumping bracket, counting
//! nesting depth. Programs are only checked for equal bracket counts when
//! loaded, so a scan can run off either end of an ill-nested program.
//!
//! [`JumpResolver::Cached`] pairs every bracket in one pass up front, giving
//! the same targets as the scans. Unmatched brackets are cached as unmatched,
//! so the fault still happens at the same instruction and only if the jump is
//! actually taken.

use std::fmt;
use vague_spec::{Instruction, Program};

/// Scan direction of a bracket match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanDirection {
    /// From `(` towards its `)`
    Forward,
    /// From `)` back towards its `(`
    Backward,
}

impl fmt::Display for ScanDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanDirection::Forward => write!(f, "forward"),
            ScanDirection::Backward => write!(f, "backward"),
        }
    }
}

/// Find the `)` matching the `(` at `from`
pub fn scan_forward(instructions: &[Instruction], from: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (pos, inst) in instructions.iter().enumerate().skip(from + 1) {
        match inst {
            Instruction::LoopStart => depth += 1,
            Instruction::LoopEnd if depth == 0 => return Some(pos),
            Instruction::LoopEnd => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Find the `(` matching the `)` at `from`
pub fn scan_backward(instructions: &[Instruction], from: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (pos, inst) in instructions.iter().enumerate().take(from).rev() {
        match inst {
            Instruction::LoopEnd => depth += 1,
            Instruction::LoopStart if depth == 0 => return Some(pos),
            Instruction::LoopStart => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Precomputed bracket targets, indexed by instruction position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpTable {
    targets: Vec<Option<usize>>,
}

impl JumpTable {
    pub fn build(program: &Program) -> Self {
        let mut targets = vec![None; program.len()];
        let mut opens = Vec::new();

        let brackets = program.into_iter().enumerate().filter(|(_, inst)| inst.is_bracket());
        for (ip, inst) in brackets {
            if *inst == Instruction::LoopStart {
                opens.push(ip);
            } else if let Some(start) = opens.pop() {
                targets[start] = Some(ip);
                targets[ip] = Some(start);
            }
            // A `)` with no open `(` before it stays unmatched
        }
        // Every `(` still in `opens` stays unmatched too

        JumpTable { targets }
    }

    /// Matching bracket of the bracket at `ip`
    #[inline]
    pub fn target(&self, ip: usize) -> Option<usize> {
        self.targets.get(ip).copied().flatten()
    }
}

/// How matching brackets are found when a jump is taken
#[derive(Debug, Clone)]
pub enum JumpResolver {
    /// Scan the program on every jump
    Scan,
    /// Look up a table built once per program
    Cached(JumpTable),
}

impl JumpResolver {
    pub fn new(program: &Program, cache: bool) -> Self {
        if cache {
            JumpResolver::Cached(JumpTable::build(program))
        } else {
            JumpResolver::Scan
        }
    }

    /// Resolve the jump target of the bracket at `ip`
    pub fn resolve(&self, program: &Program, ip: usize, direction: ScanDirection) -> Option<usize> {
        match self {
            JumpResolver::Scan => match direction {
                ScanDirection::Forward => scan_forward(program.instructions(), ip),
                ScanDirection::Backward => scan_backward(program.instructions(), ip),
            },
            JumpResolver::Cached(table) => table.target(ip),
        }
    }
}
