use bindparse::prelude::bp::parsers::spaces;
use bindparse::prelude::*;

pub fn bindparse_parser(p: &Parser<i64>, s: &str) -> Option<i64> {
    run(p, s).success()
}

fn token<T: 'static>(p: Parser<T>) -> Parser<T> {
    p.skip(spaces())
}

fn number() -> Parser<i64> {
    token(many_one(digit())).map(|ds| ds.into_iter().fold(0, |acc, d| acc * 10 + i64::from(d)))
}

fn fold(operand: Parser<i64>, operators: &str) -> Parser<i64> {
    operand
        .clone()
        .and(many(token(any_of(operators)).and(operand)))
        .map(|(first, rest)| {
            rest.into_iter().fold(first, |acc, (op, rhs)| match op {
                '+' => acc + rhs,
                '-' => acc - rhs,
                '*' => acc * rhs,
                _ => acc / rhs,
            })
        })
}

fn factor() -> Parser<i64> {
    or([
        number(),
        token(char('(')).then(late(expr)).skip(token(char(')'))),
    ])
}

fn expr() -> Parser<i64> {
    fold(fold(factor(), "*/"), "+-")
}

pub fn calculator() -> Parser<i64> {
    spaces().then(expr()).skip(eof())
}
