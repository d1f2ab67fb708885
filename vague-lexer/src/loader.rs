//! Load source text into a validated program

use crate::error::{LexerError, Result};
use crate::lexer::lex;
use std::path::Path;
use vague_spec::Program;

/// Lex and validate source text
pub fn load(source: &str) -> Result<Program> {
    let instructions = lex(source);
    let count = instructions.len();

    let program = Program::new(instructions)?;
    tracing::debug!(
        instructions = count,
        loops = program.loop_count(),
        "loaded program"
    );

    Ok(program)
}

/// Read a program file in full and load it
pub fn load_file(path: impl AsRef<Path>) -> Result<Program> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| LexerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load(&source)
}
