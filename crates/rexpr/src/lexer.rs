//! Lexer implementation.

use logos::Logos;
use std::fmt;

/// A lexical unit of the input string.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token<'source> {
    /// A maximal run of decimal digits, kept as source text.
    Number(&'source str),
    /// A single character that is neither a digit nor one of `+-*/()`.
    Unknown(&'source str),
    Plus,
    Minus,
    Mult,
    Div,
    OpenParen,
    CloseParen,
}

impl<'source> Token<'source> {
    /// Return the text carried by this token, if any.
    pub fn text(&self) -> Option<&'source str> {
        match self {
            Self::Number(s) | Self::Unknown(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(s) | Self::Unknown(s) => f.write_str(s),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Mult => f.write_str("*"),
            Self::Div => f.write_str("/"),
            Self::OpenParen => f.write_str("("),
            Self::CloseParen => f.write_str(")"),
        }
    }
}

// recognized lexemes. anything else is reported as a lexer error and
// turned into `Token::Unknown` by `tokenize`.
#[derive(Debug, Copy, Clone, Logos, PartialEq)]
enum Lexeme<'source> {
    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Mult,

    #[token("/")]
    Div,

    #[regex(r"[0-9]+")]
    Number(&'source str),
}

impl<'source> From<Lexeme<'source>> for Token<'source> {
    fn from(lexeme: Lexeme<'source>) -> Self {
        match lexeme {
            Lexeme::OpenParen => Token::OpenParen,
            Lexeme::CloseParen => Token::CloseParen,
            Lexeme::Plus => Token::Plus,
            Lexeme::Minus => Token::Minus,
            Lexeme::Mult => Token::Mult,
            Lexeme::Div => Token::Div,
            Lexeme::Number(s) => Token::Number(s),
        }
    }
}

/// Split the input string into a sequence of tokens.
///
/// This never fails: every unrecognized character becomes its own
/// `Token::Unknown`, and is rejected later by the parser.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexeme::lexer(input);
    let mut tokens = vec![];

    while let Some(lexeme) = lexer.next() {
        match lexeme {
            Ok(lexeme) => {
                let token = Token::from(lexeme);
                tracing::trace!("token {:?}", token);
                tokens.push(token);
            }
            Err(()) => {
                let slice = lexer.slice();
                for (i, ch) in slice.char_indices() {
                    let token = Token::Unknown(&slice[i..i + ch.len_utf8()]);
                    tracing::trace!("unknown token {:?}", token);
                    tokens.push(token);
                }
            }
        }
    }

    tokens
}
