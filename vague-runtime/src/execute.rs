//! Instruction execution

use crate::error::{Result, RuntimeError};
use crate::jumps::{JumpResolver, ScanDirection};
use crate::state::{ExecutionState, Mode, Rotation, StackLevel};
use vague_spec::{Instruction, Program, Value};

/// What the VM does after an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Continue with the next instruction
    Next,
    /// Continue at this instruction (a loop bracket)
    Jump(usize),
    /// Print this value, then continue with the next instruction
    Print(Value),
    /// Stop the program
    Halt,
}

/// Pop an operand from the value stack, whatever the mode
fn pop_operand(state: &mut ExecutionState, ip: usize) -> Result<Value> {
    state.pop_value().ok_or(RuntimeError::StackUnderflow {
        ip,
        level: StackLevel::Inner,
    })
}

/// Execute the instruction at `ip`
pub fn execute(
    inst: Instruction,
    ip: usize,
    state: &mut ExecutionState,
    program: &Program,
    jumps: &JumpResolver,
) -> Result<Effect> {
    let routing = state.mode.routing();

    match inst {
        Instruction::Add => {
            let operand = pop_operand(state, ip)?;
            state.accumulator = operand.add(state.accumulator);
        }
        Instruction::Decrement => {
            state.accumulator = state.accumulator.decrement();
        }
        Instruction::Nand => {
            let operand = pop_operand(state, ip)?;
            state.accumulator = operand.nand(state.accumulator);
        }
        Instruction::Zero => {
            state.accumulator = Value::ZERO;
        }

        Instruction::Print => return Ok(Effect::Print(state.accumulator)),

        Instruction::RotateRight => state.rotate(routing.rotate, Rotation::Right),
        Instruction::RotateLeft => state.rotate(routing.rotate, Rotation::Left),
        Instruction::Push => match routing.push_pop {
            StackLevel::Inner => state.push_value(state.accumulator),
            StackLevel::Outer => state.push_stack(),
        },
        Instruction::Pop => match routing.push_pop {
            StackLevel::Inner => {
                state.accumulator = pop_operand(state, ip)?;
            }
            StackLevel::Outer => {
                state.pop_stack().ok_or(RuntimeError::StackUnderflow {
                    ip,
                    level: StackLevel::Outer,
                })?;
            }
        },
        Instruction::True => state.push_value(Value::TRUE),
        Instruction::False => state.push_value(Value::FALSE),

        Instruction::Discouraged => state.set_styled(),
        Instruction::SetMode1D => state.mode = Mode::OneD,
        Instruction::SetMode2D => state.mode = Mode::TwoD,

        Instruction::End => return Ok(Effect::Halt),
        Instruction::LoopStart => {
            if !state.accumulator.is_truthy() {
                return jump(program, jumps, ip, ScanDirection::Forward);
            }
        }
        Instruction::LoopEnd => {
            if state.accumulator.is_truthy() {
                return jump(program, jumps, ip, ScanDirection::Backward);
            }
        }
    }

    Ok(Effect::Next)
}

fn jump(
    program: &Program,
    jumps: &JumpResolver,
    ip: usize,
    direction: ScanDirection,
) -> Result<Effect> {
    jumps
        .resolve(program, ip, direction)
        .map(Effect::Jump)
        .ok_or(RuntimeError::JumpOutOfRange { ip, direction })
}
