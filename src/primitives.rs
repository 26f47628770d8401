//! Leaf parsers, each consuming at most a fixed piece of input.
//!
//! Every primitive hands back its input state untouched when it fails.

use crate::error::{describe_head, failure};
use crate::logging::Loggable;
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::state::ParseState;

fn one_char<V, P, M>(action: &'static str, pred: P, message: M) -> Parser<char, V>
where
    V: Clone + 'static,
    P: Fn(char) -> bool + Send + Sync + 'static,
    M: Fn(Option<char>) -> String + Send + Sync + 'static,
{
    Parser::from_fn(move |state: ParseState<'_, V>| {
        state.log_inputs(action, "");
        match state.peek() {
            Some(c) if pred(c) => {
                let mut buf = [0u8; 4];
                let state = state.advance(c.encode_utf8(&mut buf));
                state.log_success_with_result(action, "", &c);
                (Outcome::Success(c), state)
            }
            head => {
                let e = failure(message(head));
                state.log_failure(action, "", &e);
                (Outcome::Failure(e), state)
            }
        }
    })
}

/// One character matching `pred`; `description` names what was wanted.
pub fn satisfy<V, P>(description: impl Into<String>, pred: P) -> Parser<char, V>
where
    V: Clone + 'static,
    P: Fn(char) -> bool + Send + Sync + 'static,
{
    let description = description.into();
    one_char("satisfy", pred, move |head| {
        format!("expected {description}, got {}", describe_head(head))
    })
}

/// Exactly the character `ch`.
pub fn char<V: Clone + 'static>(ch: char) -> Parser<char, V> {
    one_char(
        "char",
        move |c| c == ch,
        move |head| format!("expected char `{ch}`, got {}", describe_head(head)),
    )
}

pub fn any_char<V: Clone + 'static>() -> Parser<char, V> {
    one_char("any_char", |_| true, |_| String::from("expected any char"))
}

/// One character from `set`.
pub fn any_of<V: Clone + 'static>(set: impl Into<String>) -> Parser<char, V> {
    let set = set.into();
    let wanted = set.clone();
    one_char(
        "any_of",
        move |c| set.contains(c),
        move |head| format!("expected any of `{wanted}`, got {}", describe_head(head)),
    )
}

/// One character not in `set`. Fails at end of input.
pub fn none_of<V: Clone + 'static>(set: impl Into<String>) -> Parser<char, V> {
    let set = set.into();
    let unwanted = set.clone();
    one_char(
        "none_of",
        move |c| !set.contains(c),
        move |head| format!("expected none of `{unwanted}`, got {}", describe_head(head)),
    )
}

/// An ASCII digit, yielded as its numeric value.
pub fn digit<V: Clone + 'static>() -> Parser<u32, V> {
    one_char(
        "digit",
        |c| c.is_ascii_digit(),
        |head| format!("expected digit, got {}", describe_head(head)),
    )
    .map(|c| c.to_digit(10).unwrap_or_default())
}

/// An alphabetic character.
pub fn letter<V: Clone + 'static>() -> Parser<char, V> {
    one_char(
        "letter",
        char::is_alphabetic,
        |head| format!("expected letter, got {}", describe_head(head)),
    )
}

/// The literal text `text`. The empty string always matches and consumes nothing.
pub fn string<V: Clone + 'static>(text: impl Into<String>) -> Parser<String, V> {
    let text = text.into();
    Parser::from_fn(move |state: ParseState<'_, V>| {
        state.log_inputs("string", &text);
        if state.remaining().starts_with(text.as_str()) {
            let state = state.advance(&text);
            state.log_success("string", &text);
            (Outcome::Success(text.clone()), state)
        } else {
            let e = failure(format!(
                "expected `{text}` at position {pos}",
                pos = state.position()
            ));
            state.log_failure("string", &text, &e);
            (Outcome::Failure(e), state)
        }
    })
}

/// Succeeds only once the input is used up.
pub fn eof<V: Clone + 'static>() -> Parser<(), V> {
    Parser::from_fn(|state: ParseState<'_, V>| {
        if state.is_at_end() {
            state.log_success("eof", "");
            (Outcome::Success(()), state)
        } else {
            let e = failure(format!(
                "expected end of input at position {pos}",
                pos = state.position()
            ));
            state.log_failure("eof", "", &e);
            (Outcome::Failure(e), state)
        }
    })
}
