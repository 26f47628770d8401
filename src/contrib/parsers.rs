use once_cell::sync::Lazy;

use crate::prelude::*;

static IDENT_TAIL: Lazy<Vec<char>> = Lazy::new(|| {
    ('a'..='z')
        .chain('A'..='Z')
        .chain('0'..='9')
        .chain(['_'])
        .collect()
});

// \b[A-Z0-9._%+-]+@[A-Z0-9.-]+\b
static NAME: Lazy<Vec<char>> = Lazy::new(|| {
    ('A'..='Z')
        .chain('0'..='9')
        .chain(['.', '_', '%', '+', '-'])
        .collect()
});
static DOMAIN: Lazy<Vec<char>> =
    Lazy::new(|| ('A'..='Z').chain('0'..='9').chain(['.', '-']).collect());

fn text_of<V: Clone + 'static>(p: Parser<Vec<char>, V>) -> Parser<String, V> {
    p.map(|cs| cs.into_iter().collect())
}

fn one_of_set<V: Clone + 'static>(
    description: &'static str,
    set: &'static Lazy<Vec<char>>,
) -> Parser<char, V> {
    satisfy(description, move |c: char| set.contains(&c.to_ascii_uppercase()))
}

/// Zero or more whitespace characters.
pub fn spaces<V: Clone + 'static>() -> Parser<(), V> {
    many(satisfy("whitespace", char::is_whitespace)).map(|_| ())
}

/// A decimal integer with an optional sign, e.g. `-42`, `+7`, `0`.
pub fn integer<V: Clone + 'static>() -> Parser<i64, V> {
    opt('+', any_of("+-"))
        .and(many_one(digit()))
        .try_map(|(sign, digits)| {
            let magnitude = digits.iter().try_fold(0_i64, |acc, &d| {
                acc.checked_mul(10)?.checked_sub(i64::from(d))
            });
            let n = match (sign, magnitude) {
                ('-', Some(n)) => Some(n),
                (_, Some(n)) => n.checked_neg(),
                (_, None) => None,
            };
            n.ok_or("integer out of range")
        })
        .label("expected integer")
}

/// A letter or underscore, then any run of letters, digits and underscores.
pub fn identifier<V: Clone + 'static>() -> Parser<String, V> {
    or([letter(), char('_')])
        .and(many(satisfy("identifier char", |c| IDENT_TAIL.contains(&c))))
        .map(|(head, tail)| std::iter::once(head).chain(tail).collect())
}

/// A simple e-mail address, `name@domain`.
pub fn email<V: Clone + 'static>() -> Parser<String, V> {
    seq([
        text_of(many_one(one_of_set("name char", &NAME))),
        string("@"),
        text_of(many_one(one_of_set("domain char", &DOMAIN))),
    ])
    .map(|parts| parts.concat())
    .debug_context("email")
}
