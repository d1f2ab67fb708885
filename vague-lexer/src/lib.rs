//! Vague Lexer
//!
//! Turn Vague source text into a validated [`Program`](vague_spec::Program).
//!
//! ## Example
//!
//! ```rust
//! use vague_lexer::load;
//!
//! // Spaces are ignored, like every other non-instruction character
//! let program = load("2 t = t & !").unwrap();
//! assert_eq!(program.to_string(), "2t=t&!");
//! ```

pub mod error;
pub mod lexer;
pub mod loader;

pub use error::{LexerError, Result};
pub use lexer::{lex, tokens, Token};
pub use loader::{load, load_file};
