//! Execution state for the Vague interpreter
//!
//! The data area is a stack of value stacks. Position 0 of the outer
//! sequence is the *top stack*; its values form the *value stack*. The mode
//! decides which level push/pop and rotate act on, and the two pairs are
//! always routed to opposite levels:
//!
//! | Mode   | Push / Pop       | Rotate           |
//! |--------|------------------|------------------|
//! | `OneD` | stack of stacks  | value stack      |
//! | `TwoD` | value stack      | stack of stacks  |

use std::collections::VecDeque;
use std::fmt;
use vague_spec::Value;

/// One of the two levels of the data area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackLevel {
    /// The sequence of stacks
    Outer,
    /// The values of the top stack
    Inner,
}

impl fmt::Display for StackLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackLevel::Outer => write!(f, "stack of stacks"),
            StackLevel::Inner => write!(f, "value stack"),
        }
    }
}

/// Levels targeted by the mode-dependent instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routing {
    /// Level for `=` and `_`
    pub push_pop: StackLevel,
    /// Level for `>` and `<`
    pub rotate: StackLevel,
}

/// Addressing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    OneD,
    TwoD,
}

impl Mode {
    /// The routing table. Push/pop and rotate never share a level.
    pub const fn routing(self) -> Routing {
        match self {
            Mode::OneD => Routing {
                push_pop: StackLevel::Outer,
                rotate: StackLevel::Inner,
            },
            Mode::TwoD => Routing {
                push_pop: StackLevel::Inner,
                rotate: StackLevel::Outer,
            },
        }
    }
}

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Move the last element to the front
    Right,
    /// Move the first element to the back
    Left,
}

/// Interpreter state for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionState {
    /// The accumulator
    pub accumulator: Value,

    /// Addressing mode
    pub mode: Mode,

    /// Stack of value stacks, never empty
    stacks: VecDeque<VecDeque<Value>>,

    /// Discouraged (styled output) mode, one-way
    styled: bool,
}

impl ExecutionState {
    pub fn new() -> Self {
        ExecutionState {
            accumulator: Value::ZERO,
            mode: Mode::OneD,
            stacks: VecDeque::from([VecDeque::new()]),
            styled: false,
        }
    }

    /// Push a value onto the back of the top stack
    #[inline]
    pub fn push_value(&mut self, value: Value) {
        self.stacks[0].push_back(value);
    }

    /// Pop a value from the front of the top stack
    #[inline]
    pub fn pop_value(&mut self) -> Option<Value> {
        self.stacks[0].pop_front()
    }

    /// Prepend a new empty stack, making it the top stack
    #[inline]
    pub fn push_stack(&mut self) {
        self.stacks.push_front(VecDeque::new());
    }

    /// Remove the top stack. The last remaining stack cannot be removed.
    pub fn pop_stack(&mut self) -> Option<VecDeque<Value>> {
        if self.stacks.len() <= 1 {
            return None;
        }
        self.stacks.pop_front()
    }

    /// Rotate one level by a single position (no-op below two elements)
    pub fn rotate(&mut self, level: StackLevel, rotation: Rotation) {
        match level {
            StackLevel::Outer => rotate_once(&mut self.stacks, rotation),
            StackLevel::Inner => rotate_once(&mut self.stacks[0], rotation),
        }
    }

    /// The top stack
    #[inline]
    pub fn top_stack(&self) -> &VecDeque<Value> {
        &self.stacks[0]
    }

    /// All stacks, top stack first
    #[inline]
    pub fn stacks(&self) -> &VecDeque<VecDeque<Value>> {
        &self.stacks
    }

    /// Number of stacks
    #[inline]
    pub fn depth(&self) -> usize {
        self.stacks.len()
    }

    /// Whether output is styled
    #[inline]
    pub fn is_styled(&self) -> bool {
        self.styled
    }

    /// Turn on styled output. There is no way back.
    #[inline]
    pub fn set_styled(&mut self) {
        self.styled = true;
    }
}

impl Default for ExecutionState {
    fn default() -> Self {
        Self::new()
    }
}

fn rotate_once<T>(seq: &mut VecDeque<T>, rotation: Rotation) {
    if seq.len() < 2 {
        return;
    }
    match rotation {
        Rotation::Right => seq.rotate_right(1),
        Rotation::Left => seq.rotate_left(1),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HaltReason {
    /// `.` executed at this instruction
    End { ip: usize },
    /// Ran past the last instruction
    EndOfProgram,
    /// `max_steps` reached
    StepLimit,
}
