//! Parser.
//!
//! The grammar has no operator precedence: the right operand of every
//! operator is the whole remainder of the expression, up to the next
//! unmatched `)` or the end of input. `1+2*3+4` therefore reads as
//! `1 + (2 * (3 + 4))`.

use crate::{
    lexer::{tokenize, Token},
    syntax::Expr,
};
use std::num::ParseIntError;

/// Position in the token sequence.
pub type TokenIdx = usize;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected end of input at token #{index}")]
    UnexpectedEoi { index: TokenIdx },

    #[error("invalid number {text:?} at token #{index}")]
    InvalidNumber {
        index: TokenIdx,
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("expected a number or `(', found `{token}' at token #{index}")]
    ExpectedPrimary { index: TokenIdx, token: String },

    #[error("invalid operator `{token}' at token #{index}")]
    InvalidOperator { index: TokenIdx, token: String },
}

fn token_at<'t, 'source>(
    tokens: &'t [Token<'source>],
    index: TokenIdx,
) -> Result<&'t Token<'source>, ParseError> {
    tokens.get(index).ok_or(ParseError::UnexpectedEoi { index })
}

/// Parse a number literal or a parenthesized sub-expression at `idx`.
pub fn parse_primary(
    tokens: &[Token<'_>],
    idx: TokenIdx,
) -> Result<(Box<Expr>, TokenIdx), ParseError> {
    match token_at(tokens, idx)? {
        // the closing paren is consumed by the operator position of the
        // nested `parse`.
        Token::OpenParen => parse(tokens, idx + 1),

        Token::Number(text) | Token::Unknown(text) => {
            let n = text.parse::<i64>().map_err(|source| ParseError::InvalidNumber {
                index: idx,
                text: text.to_string(),
                source,
            })?;
            tracing::trace!("primary: num {} at #{}", n, idx);
            Ok((Box::new(Expr::Num(n)), idx + 1))
        }

        token => Err(ParseError::ExpectedPrimary {
            index: idx,
            token: token.to_string(),
        }),
    }
}

/// Parse an expression starting at `idx`.
///
/// Returns the parsed tree together with the index of the first token
/// that was not consumed.
pub fn parse(tokens: &[Token<'_>], idx: TokenIdx) -> Result<(Box<Expr>, TokenIdx), ParseError> {
    let span = tracing::trace_span!("parse", idx);
    let _entered = span.enter();

    let (lhs, idx) = parse_primary(tokens, idx)?;

    let op = match tokens.get(idx) {
        Some(op) => op,
        None => return Ok((lhs, idx)),
    };

    if let Token::CloseParen = op {
        tracing::trace!("close paren at #{}", idx);
        return Ok((lhs, idx + 1));
    }

    // the right operand is parsed before the operator is inspected.
    let (rhs, next_idx) = parse(tokens, idx + 1)?;

    let expr = match op {
        Token::Plus => Expr::Add { lhs, rhs },
        Token::Minus => Expr::Subtract { lhs, rhs },
        Token::Mult => Expr::Multiply { lhs, rhs },
        token => {
            return Err(ParseError::InvalidOperator {
                index: idx,
                token: token.to_string(),
            })
        }
    };
    tracing::trace!("reduce: {}", expr);

    Ok((Box::new(expr), next_idx))
}

/// Tokenize the input string and parse it from the first token.
///
/// Tokens remaining after the top-level expression are ignored.
pub fn parse_input(input: &str) -> Result<Box<Expr>, ParseError> {
    let tokens = tokenize(input);
    let (expr, next_idx) = parse(&tokens, 0)?;
    if next_idx < tokens.len() {
        tracing::debug!(
            "ignored {} trailing token(s) starting at #{}",
            tokens.len() - next_idx,
            next_idx
        );
    }
    Ok(expr)
}
