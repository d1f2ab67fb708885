//! # Vague Instruction Set
//!
//! Every instruction is a single source character. The table is fixed and
//! bijective; characters outside it are comments.
//!
//! ## Instruction Families
//! - Accumulator: `+` `-` `&` `0`
//! - Stack: `=` `_` `>` `<` `t` `f`
//! - Mode: `1` `2` `*`
//! - Control: `(` `)` `.`
//! - Output: `!`

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single Vague instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    // ========== Accumulator ==========
    /// `+`: acc = pop_value() + acc
    Add,
    /// `-`: acc = acc - 1
    Decrement,
    /// `&`: acc = pop_value() NAND acc
    Nand,
    /// `0`: acc = 0
    Zero,

    // ========== Output ==========
    /// `!`: print the accumulator
    Print,

    // ========== Stack ==========
    /// `>`: move the last element to the front (level depends on mode)
    RotateRight,
    /// `<`: move the first element to the back (level depends on mode)
    RotateLeft,
    /// `=`: push the accumulator / push a new stack
    Push,
    /// `_`: pop a value into the accumulator / drop the top stack
    Pop,
    /// `t`: push `true` onto the value stack
    True,
    /// `f`: push `false` onto the value stack
    False,

    // ========== Mode ==========
    /// `*`: enable randomized output styling
    Discouraged,
    /// `1`: push/pop act on the stack of stacks
    SetMode1D,
    /// `2`: push/pop act on the value stack
    SetMode2D,

    // ========== Control ==========
    /// `.`: stop the program
    End,
    /// `(`: skip to the matching `)` while the accumulator is falsy
    LoopStart,
    /// `)`: jump back to the matching `(` while the accumulator is truthy
    LoopEnd,
}

impl Instruction {
    /// All instructions, in source-table order
    pub const ALL: [Instruction; 17] = [
        Instruction::Add,
        Instruction::Decrement,
        Instruction::Print,
        Instruction::RotateRight,
        Instruction::RotateLeft,
        Instruction::Nand,
        Instruction::Push,
        Instruction::Pop,
        Instruction::End,
        Instruction::Zero,
        Instruction::Discouraged,
        Instruction::SetMode2D,
        Instruction::SetMode1D,
        Instruction::True,
        Instruction::False,
        Instruction::LoopStart,
        Instruction::LoopEnd,
    ];

    /// Look up the instruction for a source character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Instruction::Add),
            '-' => Some(Instruction::Decrement),
            '!' => Some(Instruction::Print),
            '>' => Some(Instruction::RotateRight),
            '<' => Some(Instruction::RotateLeft),
            '&' => Some(Instruction::Nand),
            '=' => Some(Instruction::Push),
            '_' => Some(Instruction::Pop),
            '.' => Some(Instruction::End),
            '0' => Some(Instruction::Zero),
            '*' => Some(Instruction::Discouraged),
            '2' => Some(Instruction::SetMode2D),
            '1' => Some(Instruction::SetMode1D),
            't' => Some(Instruction::True),
            'f' => Some(Instruction::False),
            '(' => Some(Instruction::LoopStart),
            ')' => Some(Instruction::LoopEnd),
            _ => None,
        }
    }

    /// Source character of this instruction
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Instruction::Add => '+',
            Instruction::Decrement => '-',
            Instruction::Print => '!',
            Instruction::RotateRight => '>',
            Instruction::RotateLeft => '<',
            Instruction::Nand => '&',
            Instruction::Push => '=',
            Instruction::Pop => '_',
            Instruction::End => '.',
            Instruction::Zero => '0',
            Instruction::Discouraged => '*',
            Instruction::SetMode2D => '2',
            Instruction::SetMode1D => '1',
            Instruction::True => 't',
            Instruction::False => 'f',
            Instruction::LoopStart => '(',
            Instruction::LoopEnd => ')',
        }
    }

    /// Check if this instruction is a loop bracket
    #[inline]
    pub const fn is_bracket(self) -> bool {
        matches!(self, Instruction::LoopStart | Instruction::LoopEnd)
    }

    /// Get instruction mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Add => "add",
            Instruction::Decrement => "dec",
            Instruction::Print => "print",
            Instruction::RotateRight => "rotr",
            Instruction::RotateLeft => "rotl",
            Instruction::Nand => "nand",
            Instruction::Push => "push",
            Instruction::Pop => "pop",
            Instruction::End => "end",
            Instruction::Zero => "zero",
            Instruction::Discouraged => "discouraged",
            Instruction::SetMode2D => "mode2d",
            Instruction::SetMode1D => "mode1d",
            Instruction::True => "true",
            Instruction::False => "false",
            Instruction::LoopStart => "loop",
            Instruction::LoopEnd => "endloop",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
