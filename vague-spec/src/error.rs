//! # Error Types for Vague programs

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("Malformed program: {opens} loop start(s) `(` but {closes} loop end(s) `)`")]
    MalformedProgram { opens: usize, closes: usize },
}

pub type Result<T> = std::result::Result<T, SpecError>;
