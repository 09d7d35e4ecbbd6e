//! Syntax definition.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Num(i64),
    Add { lhs: Box<Expr>, rhs: Box<Expr> },
    Subtract { lhs: Box<Expr>, rhs: Box<Expr> },
    Multiply { lhs: Box<Expr>, rhs: Box<Expr> },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{}", n),
            Self::Add { lhs, rhs } => write!(f, "(+ {} {})", lhs, rhs),
            Self::Subtract { lhs, rhs } => write!(f, "(- {} {})", lhs, rhs),
            Self::Multiply { lhs, rhs } => write!(f, "(* {} {})", lhs, rhs),
        }
    }
}
