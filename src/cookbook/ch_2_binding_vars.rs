//! Capturing parts of the input with `bind` and assembling them with `gather`.

use crate::prelude::*;

#[derive(PartialEq, Debug)]
pub struct Time(pub u32, pub u32, pub f64);

fn digits(n: usize) -> Parser<String> {
    seq(std::iter::repeat_with(|| digit().map(|d| d.to_string())).take(n))
        .map(|ds| ds.concat())
}

/// `23:59:13.234`, with every field captured as text and converted at the end.
pub fn time() -> Parser<Time> {
    let seconds = seq([digits(2), string("."), digits(3)]).map(|parts| parts.concat());
    try_gather(
        chain([
            bind("hh", digits(2)),
            string(":"),
            bind("mm", digits(2)),
            string(":"),
            bind("sss", seconds),
        ]),
        |d: &Bindings| {
            let field = |k: &str| {
                d.get(k)
                    .cloned()
                    .ok_or_else(|| ParseError::new(format!("no {k} captured")))
            };
            let number = |k: &str, e: String| ParseError::new(format!("bad {k}: {e}"));
            let hh = field("hh")?.parse::<u32>().map_err(|e| number("hh", e.to_string()))?;
            let mm = field("mm")?.parse::<u32>().map_err(|e| number("mm", e.to_string()))?;
            let sss = field("sss")?.parse::<f64>().map_err(|e| number("sss", e.to_string()))?;
            Ok(Time(hh, mm, sss))
        },
    )
}

/// Values of more than one kind, captured in one grammar.
#[derive(Clone, PartialEq, Debug)]
pub enum Field {
    Quote(char),
    Text(String),
}

impl From<char> for Field {
    fn from(c: char) -> Self {
        Field::Quote(c)
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Text(s)
    }
}

#[derive(PartialEq, Debug)]
pub struct QuotedText {
    pub quote: char,
    pub text: String,
}

fn quoted_with(quote: char) -> Parser<(), Field> {
    let body = many(none_of(quote.to_string())).map(|cs| cs.into_iter().collect::<String>());
    seq([
        bind("quote", char(quote)).map(|_| ()),
        bind("text", body).map(|_| ()),
        char(quote).map(|_| ()),
    ])
    .map(|_| ())
}

/// eg `'Hello World!', said Ferris`
pub fn quoted_text() -> Parser<QuotedText, Field> {
    gather(or([quoted_with('\''), quoted_with('"')]), |d: &Bindings<Field>| {
        match (d.get("quote"), d.get("text")) {
            (Some(Field::Quote(quote)), Some(Field::Text(text))) => QuotedText {
                quote: *quote,
                text: text.clone(),
            },
            _ => QuotedText {
                quote: '?',
                text: String::new(),
            },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_parse_time() {
        let p = time();
        assert_eq!(run(&p, "23:59:13.234"), Outcome::Success(Time(23, 59, 13.234)));
        assert_eq!(
            run(&p, "23:59:13.234Hello"),
            Outcome::Success(Time(23, 59, 13.234))
        );
        assert!(run(&p, "23:X:13.234Hello").is_failure());

        let (_, state) = p.invoke(ParseState::new("01:02:03.004 rest"));
        assert_eq!(state.remaining(), " rest");
        assert!(state.bindings().is_empty());
    }

    #[test]
    fn test_parse_quoted_text() {
        let p = quoted_text();
        let (outcome, state) = p.invoke(ParseState::new("'Hello World!', said Ferris"));
        assert_eq!(
            outcome,
            Outcome::Success(QuotedText {
                quote: '\'',
                text: "Hello World!".to_string()
            })
        );
        assert_eq!(state.remaining(), ", said Ferris");

        assert_eq!(
            run(&p, "\"Hi\", he said"),
            Outcome::Success(QuotedText {
                quote: '"',
                text: "Hi".to_string()
            })
        );
        assert!(run(&p, "'Hi, ").is_failure());
    }
}
