//! # Lexer for Vague Source Text

use logos::Logos;
use std::ops::Range;
use vague_spec::Instruction;

/// Tokens of Vague source text
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[^+\-!><&=_.0*21tf()]+")] // Everything else is a comment
pub enum Token {
    /// A single instruction character
    #[regex(r"[+\-!><&=_.0*21tf()]", |lex| lex.slice().chars().next().and_then(Instruction::from_char))]
    Op(Instruction),
}

impl From<Token> for Instruction {
    fn from(token: Token) -> Self {
        match token {
            Token::Op(inst) => inst,
        }
    }
}

/// Iterate over instructions with their byte spans in `source`
pub fn tokens(source: &str) -> impl Iterator<Item = (Instruction, Range<usize>)> + '_ {
    Token::lexer(source)
        .spanned()
        .filter_map(|(token, span)| token.ok().map(|t| (Instruction::from(t), span)))
}

/// Map source text to its instruction sequence, dropping unmapped characters
pub fn lex(source: &str) -> Vec<Instruction> {
    tokens(source).map(|(inst, _)| inst).collect()
}
