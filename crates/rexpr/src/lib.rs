//! A tiny arithmetic pipeline: lexer, parser and evaluator.
//!
//! Operators have no precedence and group to the right, so `1+2*3+4`
//! evaluates to `15`.

pub mod eval;
pub mod lexer;
pub mod parser;
pub mod syntax;

pub use crate::{
    eval::{evaluate, value},
    lexer::{tokenize, Token},
    parser::{parse, parse_input, parse_primary, ParseError},
    syntax::Expr,
};
