//! Evaluator.

use crate::{
    parser::{parse_input, ParseError},
    syntax::Expr,
};

/// Reduce the expression tree to a single integer.
///
/// Arithmetic wraps around on `i64` overflow.
pub fn value(expr: &Expr) -> i64 {
    match expr {
        Expr::Num(n) => *n,
        Expr::Add { lhs, rhs } => value(lhs).wrapping_add(value(rhs)),
        Expr::Subtract { lhs, rhs } => value(lhs).wrapping_sub(value(rhs)),
        Expr::Multiply { lhs, rhs } => value(lhs).wrapping_mul(value(rhs)),
    }
}

impl Expr {
    #[inline]
    pub fn value(&self) -> i64 {
        value(self)
    }
}

/// Run the whole pipeline on the input string.
pub fn evaluate(input: &str) -> Result<(Box<Expr>, i64), ParseError> {
    let expr = parse_input(input)?;
    let n = expr.value();
    tracing::trace!("evaluated {} => {}", expr, n);
    Ok((expr, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf() {
        assert_eq!(value(&Expr::Num(42)), 42);
    }

    #[test]
    fn binary_nodes() {
        let expr = Expr::Subtract {
            lhs: Box::new(Expr::Multiply {
                lhs: Box::new(Expr::Num(6)),
                rhs: Box::new(Expr::Num(7)),
            }),
            rhs: Box::new(Expr::Add {
                lhs: Box::new(Expr::Num(40)),
                rhs: Box::new(Expr::Num(5)),
            }),
        };
        assert_eq!(expr.value(), -3);
    }

    #[test]
    fn wrapping_overflow() {
        let expr = Expr::Multiply {
            lhs: Box::new(Expr::Num(i64::MAX)),
            rhs: Box::new(Expr::Num(2)),
        };
        assert_eq!(expr.value(), -2);
    }

    #[test]
    fn pipeline() {
        let (expr, n) = evaluate("1+2*3+4").unwrap();
        assert_eq!(expr.to_string(), "(+ 1 (* 2 (+ 3 4)))");
        assert_eq!(n, 15);
    }
}
