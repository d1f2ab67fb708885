//! Loader errors

use std::path::PathBuf;
use thiserror::Error;
use vague_spec::SpecError;

#[derive(Debug, Error)]
pub enum LexerError {
    #[error(transparent)]
    Malformed(#[from] SpecError),

    #[error("Cannot read program {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LexerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_malformed_display_is_transparent() {
        let err: LexerError = SpecError::MalformedProgram { opens: 1, closes: 0 }.into();
        assert_eq!(
            err.to_string(),
            "Malformed program: 1 loop start(s) `(` but 0 loop end(s) `)`"
        );
    }

    #[test]
    fn test_io_display() {
        let err = LexerError::Io {
            path: PathBuf::from("missing.vague"),
            source: IoError::new(ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(err.to_string(), "Cannot read program missing.vague: file not found");
    }
}
