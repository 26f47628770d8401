//! A four-function calculator: rules that refer to each other through `late`.
//!
//! ```text
//! expr   := term (("+" | "-") term)*
//! term   := factor (("*" | "/") factor)*
//! factor := integer | "(" expr ")"
//! ```

use crate::contrib::parsers::{integer, spaces};
use crate::prelude::*;

fn token<T: 'static>(p: Parser<T>) -> Parser<T> {
    p.skip(spaces())
}

fn apply(first: i64, rest: Vec<(char, i64)>) -> Result<i64, &'static str> {
    rest.into_iter().try_fold(first, |acc, (op, rhs)| match op {
        '+' => acc.checked_add(rhs).ok_or("overflow"),
        '-' => acc.checked_sub(rhs).ok_or("overflow"),
        '*' => acc.checked_mul(rhs).ok_or("overflow"),
        _ if rhs == 0 => Err("division by zero"),
        _ => acc.checked_div(rhs).ok_or("overflow"),
    })
}

fn binary(operand: Parser<i64>, operators: &str) -> Parser<i64> {
    operand
        .clone()
        .and(many(token(any_of(operators)).and(operand)))
        .try_map(|(first, rest)| apply(first, rest))
}

fn factor() -> Parser<i64> {
    or([
        token(integer()),
        token(char('(')).then(late(expr)).skip(token(char(')'))),
    ])
}

fn term() -> Parser<i64> {
    binary(factor(), "*/")
}

pub fn expr() -> Parser<i64> {
    binary(term(), "+-")
}

/// A whole input holding one expression.
pub fn calculator() -> Parser<i64> {
    spaces().then(expr()).skip(eof()).debug_context("calculator")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_calculator() {
        let calc = calculator();
        assert_eq!(run(&calc, "1 + 2 * 3"), Outcome::Success(7));
        assert_eq!(run(&calc, "(1 + 2) * 3"), Outcome::Success(9));
        assert_eq!(run(&calc, " 2 * (3 + 4) - 5 "), Outcome::Success(9));
        assert_eq!(run(&calc, "((((42))))"), Outcome::Success(42));
        assert_eq!(run(&calc, "10 - -3"), Outcome::Success(13));
        assert_eq!(run(&calc, "7 / 2"), Outcome::Success(3));
    }

    #[test]
    fn test_calculator_failures() {
        let calc = calculator();
        assert_eq!(
            run(&calc, "8 / 0"),
            Outcome::Failure(ParseError::new("division by zero"))
        );
        assert_eq!(
            run(&calc, "(1 + 2"),
            Outcome::Failure(ParseError::new("expected char `)`, got end of input"))
        );
        assert!(run(&calc, "1 +").is_failure());
        assert!(run(&calc, "").is_failure());
    }
}
