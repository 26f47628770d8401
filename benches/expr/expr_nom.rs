use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{all_consuming, map_res},
    multi::fold_many0,
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};

pub fn nom_parser(s: &str) -> Option<i64> {
    all_consuming(preceded(multispace0, expr))(s)
        .ok()
        .map(|(_, n)| n)
}

fn token<'a, O, F>(f: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    terminated(f, multispace0)
}

fn number(i: &str) -> IResult<&str, i64> {
    token(map_res(digit1, |d: &str| d.parse::<i64>()))(i)
}

fn parens(i: &str) -> IResult<&str, i64> {
    delimited(token(char('(')), expr, token(char(')')))(i)
}

fn factor(i: &str) -> IResult<&str, i64> {
    alt((number, parens))(i)
}

fn apply(acc: i64, (op, rhs): (char, i64)) -> i64 {
    match op {
        '+' => acc + rhs,
        '-' => acc - rhs,
        '*' => acc * rhs,
        _ => acc / rhs,
    }
}

fn term(i: &str) -> IResult<&str, i64> {
    let (i, init) = factor(i)?;
    fold_many0(pair(token(one_of("*/")), factor), move || init, apply)(i)
}

fn expr(i: &str) -> IResult<&str, i64> {
    let (i, init) = term(i)?;
    fold_many0(pair(token(one_of("+-")), term), move || init, apply)(i)
}
