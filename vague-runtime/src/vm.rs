//! Virtual Machine for Vague

use crate::error::Result;
use crate::execute::{execute, Effect};
use crate::io::Output;
use crate::jumps::JumpResolver;
use crate::render::Renderer;
use crate::state::{ExecutionState, HaltReason};
use vague_spec::Program;

/// VM configuration
#[derive(Debug, Clone)]
pub struct VMConfig {
    /// Maximum number of steps before halting (unlimited when `None`)
    pub max_steps: Option<u64>,

    /// Log every step at `trace` level
    pub trace: bool,

    /// Resolve loop jumps through a table built at construction instead of
    /// scanning on every jump
    pub cache_jumps: bool,

    /// Honor discouraged mode. When false, printed characters are never styled.
    pub allow_styling: bool,
}

impl Default for VMConfig {
    fn default() -> Self {
        Self {
            max_steps: None,
            trace: false,
            cache_jumps: false,
            allow_styling: true,
        }
    }
}

/// Execution result
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Number of instructions executed
    pub steps: u64,

    /// Reason for halting
    pub halt_reason: HaltReason,

    /// State at the time of halting
    pub state: ExecutionState,
}

/// Vague Virtual Machine
pub struct VM<O: Output> {
    program: Program,

    /// Accumulator, stacks and flags
    state: ExecutionState,

    jumps: JumpResolver,

    renderer: Renderer,

    /// Receives everything `!` prints
    output: O,

    config: VMConfig,

    /// Index of the next instruction
    ip: usize,

    /// Instructions executed so far
    steps: u64,
}

impl<O: Output> VM<O> {
    /// Create a new VM for a program, printing to `output`
    pub fn new(program: Program, output: O, config: VMConfig) -> Self {
        let jumps = JumpResolver::new(&program, config.cache_jumps);
        let renderer = Renderer::new(config.allow_styling);

        VM {
            program,
            state: ExecutionState::new(),
            jumps,
            renderer,
            output,
            config,
            ip: 0,
            steps: 0,
        }
    }

    /// Run until the program ends, executes `.`, hits the step limit or faults.
    ///
    /// Output printed before a fault has already been written when the error
    /// is returned.
    pub fn run(&mut self) -> Result<ExecutionResult> {
        tracing::debug!(
            instructions = self.program.len(),
            cache_jumps = self.config.cache_jumps,
            "starting run"
        );

        let halt_reason = loop {
            let Some(inst) = self.program.get(self.ip) else {
                break HaltReason::EndOfProgram;
            };

            if let Some(max) = self.config.max_steps {
                if self.steps >= max {
                    break HaltReason::StepLimit;
                }
            }

            if self.config.trace {
                tracing::trace!(
                    step = self.steps,
                    ip = self.ip,
                    instruction = inst.mnemonic(),
                    accumulator = ?self.state.accumulator,
                    "step"
                );
            }

            let effect = match execute(inst, self.ip, &mut self.state, &self.program, &self.jumps)
            {
                Ok(effect) => effect,
                Err(err) => {
                    tracing::debug!(steps = self.steps, error = %err, "run aborted");
                    return Err(err);
                }
            };
            self.steps += 1;

            match effect {
                Effect::Next => self.ip += 1,
                Effect::Jump(target) => {
                    tracing::debug!(from = self.ip, to = target, "jump");
                    self.ip = target;
                }
                Effect::Print(value) => {
                    let chars = self.renderer.render(value, self.state.is_styled());
                    self.output.write_chars(&chars)?;
                    self.ip += 1;
                }
                Effect::Halt => break HaltReason::End { ip: self.ip },
            }
        };

        tracing::debug!(steps = self.steps, halt_reason = ?halt_reason, "run finished");

        Ok(ExecutionResult {
            steps: self.steps,
            halt_reason,
            state: self.state.clone(),
        })
    }

    /// Get current VM state
    pub fn state(&self) -> &ExecutionState {
        &self.state
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Index of the next instruction
    pub fn ip(&self) -> usize {
        self.ip
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }
}
