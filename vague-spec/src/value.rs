//! # Value Types for Vague
//!
//! Runtime values are either 32-bit signed integers or booleans. Mixed-type
//! operations promote to [`Value::Integer`], with one exception: NAND of two
//! booleans stays boolean. Decrementing `true` yields `false`, and
//! decrementing `false` yields `-1`.
//!
//! These asymmetries are part of the language and are reproduced exactly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A runtime value
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// 32-bit two's-complement integer (wrapping arithmetic)
    Integer(i32),
    /// Boolean
    Boolean(bool),
}

impl Value {
    /// `Integer(0)`
    pub const ZERO: Value = Value::Integer(0);
    /// `Boolean(true)`
    pub const TRUE: Value = Value::Boolean(true);
    /// `Boolean(false)`
    pub const FALSE: Value = Value::Boolean(false);

    /// Integer view used by addition (`true` = 1, `false` = 0)
    #[inline]
    const fn as_addend(self) -> i32 {
        match self {
            Value::Integer(n) => n,
            Value::Boolean(b) => b as i32,
        }
    }

    /// Bit pattern used by NAND (`true` = all ones, `false` = all zeros)
    #[inline]
    const fn as_mask(self) -> i32 {
        match self {
            Value::Integer(n) => n,
            Value::Boolean(true) => -1,
            Value::Boolean(false) => 0,
        }
    }

    /// Wrapping addition. Always produces an integer, even for two booleans.
    pub fn add(self, other: Value) -> Value {
        Value::Integer(self.as_addend().wrapping_add(other.as_addend()))
    }

    /// Decrement. `true` becomes `false`, `false` becomes `-1`.
    pub fn decrement(self) -> Value {
        match self {
            Value::Integer(n) => Value::Integer(n.wrapping_sub(1)),
            Value::Boolean(true) => Value::FALSE,
            Value::Boolean(false) => Value::Integer(-1),
        }
    }

    /// Bitwise NAND. Boolean only when both operands are boolean.
    pub fn nand(self, other: Value) -> Value {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => Value::Boolean(!(a && b)),
            (a, b) => Value::Integer(!(a.as_mask() & b.as_mask())),
        }
    }

    /// Loop condition: anything other than `Integer(0)` and `Boolean(false)`
    #[inline]
    pub fn is_truthy(self) -> bool {
        self != Value::ZERO && self != Value::FALSE
    }

    /// Textual form printed by `!`.
    ///
    /// Integers print as the single UTF-16 code unit `n mod 65536`. Code
    /// units in the surrogate range have no scalar value on their own and
    /// print as U+FFFD.
    pub fn render(self) -> String {
        match self {
            Value::Integer(n) => {
                let unit = n as u16;
                char::from_u32(unit as u32)
                    .unwrap_or(char::REPLACEMENT_CHARACTER)
                    .to_string()
            }
            Value::Boolean(b) => b.to_string(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::ZERO
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
