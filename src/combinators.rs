//! Functions building parsers out of parsers.
//!
//! A combinator that fails returns the state it was given, so the next
//! alternative (or the caller of `opt`, `many`) resumes from exactly where the
//! attempt began.

use log::debug;
use once_cell::sync::OnceCell;

use crate::error::{failure, ParseError};
use crate::logging::Loggable;
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::state::{Bindings, ParseState};
use crate::LOG_TARGET;

/// Runs `parsers` left to right, yielding the value of the last one.
///
/// Bindings made along the way carry through. The first failure stops the
/// chain.
pub fn chain<T, V, I>(parsers: I) -> Parser<T, V>
where
    T: 'static,
    V: Clone + 'static,
    I: IntoIterator<Item = Parser<T, V>>,
{
    let parsers: Vec<_> = parsers.into_iter().collect();
    Parser::from_fn(move |state: ParseState<'_, V>| {
        let Some((first, rest)) = parsers.split_first() else {
            return (Outcome::Failure(failure("chain of no parsers")), state);
        };
        let start = state.clone();
        let (mut outcome, mut state) = first.invoke(state);
        for parser in rest {
            if outcome.is_failure() {
                break;
            }
            (outcome, state) = parser.invoke(state);
        }
        match outcome {
            Outcome::Failure(e) => (Outcome::Failure(e), start),
            success => (success, state),
        }
    })
}

/// Like `chain`, but yields every value in order.
pub fn seq<T, V, I>(parsers: I) -> Parser<Vec<T>, V>
where
    T: 'static,
    V: Clone + 'static,
    I: IntoIterator<Item = Parser<T, V>>,
{
    let parsers: Vec<_> = parsers.into_iter().collect();
    Parser::from_fn(move |state: ParseState<'_, V>| {
        let start = state.clone();
        let mut values = Vec::with_capacity(parsers.len());
        let mut state = state;
        for parser in &parsers {
            match parser.invoke(state) {
                (Outcome::Success(value), next) => {
                    values.push(value);
                    state = next;
                }
                (Outcome::Failure(e), _) => return (Outcome::Failure(e), start),
            }
        }
        (Outcome::Success(values), state)
    })
}

/// Ordered choice: the first alternative to succeed, each tried from the same
/// state. When all fail, the last failure is reported.
pub fn or<T, V, I>(parsers: I) -> Parser<T, V>
where
    T: 'static,
    V: Clone + 'static,
    I: IntoIterator<Item = Parser<T, V>>,
{
    let parsers: Vec<_> = parsers.into_iter().collect();
    Parser::from_fn(move |state: ParseState<'_, V>| {
        let mut last = None;
        for parser in &parsers {
            match parser.invoke(state.clone()) {
                (Outcome::Failure(e), _) => last = Some(e),
                success => return success,
            }
        }
        let e = last.unwrap_or_else(|| failure("no alternatives to try"));
        state.log_failure("or", parsers.len(), &e);
        (Outcome::Failure(e), state)
    })
}

/// Zero or more repetitions of `parser`. Never fails.
///
/// A repetition that succeeds without consuming input would repeat forever,
/// so it ends the loop instead; its value is dropped.
pub fn many<T, V>(parser: Parser<T, V>) -> Parser<Vec<T>, V>
where
    T: 'static,
    V: Clone + 'static,
{
    Parser::from_fn(move |state: ParseState<'_, V>| {
        let mut values = Vec::new();
        let mut state = state;
        loop {
            match parser.invoke(state.clone()) {
                (Outcome::Success(value), next) if next.position() > state.position() => {
                    values.push(value);
                    state = next;
                }
                (Outcome::Success(_), _) => {
                    debug!(
                        target: LOG_TARGET,
                        "many: zero-width match at position {pos} ends repetition",
                        pos = state.position()
                    );
                    break;
                }
                (Outcome::Failure(_), _) => break,
            }
        }
        state.log_success("many", values.len());
        (Outcome::Success(values), state)
    })
}

/// One or more repetitions of `parser`.
pub fn many_one<T, V>(parser: Parser<T, V>) -> Parser<Vec<T>, V>
where
    T: 'static,
    V: Clone + 'static,
{
    let rest = many(parser.clone());
    Parser::from_fn(move |state| match parser.invoke(state) {
        (Outcome::Success(first), next) => {
            let (outcome, next) = rest.invoke(next);
            let outcome = outcome.map(|mut values| {
                values.insert(0, first);
                values
            });
            (outcome, next)
        }
        (Outcome::Failure(e), state) => (Outcome::Failure(e), state),
    })
}

/// `parser`'s value, or `default` without consuming anything. Never fails.
pub fn opt<T, V>(default: T, parser: Parser<T, V>) -> Parser<T, V>
where
    T: Clone + Send + Sync + 'static,
    V: Clone + 'static,
{
    Parser::from_fn(move |state: ParseState<'_, V>| match parser.invoke(state.clone()) {
        (Outcome::Failure(_), _) => (Outcome::Success(default.clone()), state),
        success => success,
    })
}

/// Stores `parser`'s value under `name` for a later `gather`, passing the value on.
pub fn bind<T, V>(name: impl Into<String>, parser: Parser<T, V>) -> Parser<T, V>
where
    T: Clone + Into<V> + 'static,
    V: Clone + 'static,
{
    let name = name.into();
    Parser::from_fn(move |state: ParseState<'_, V>| match parser.invoke(state) {
        (Outcome::Success(value), next) => {
            let next = next.bind(&name, value.clone().into());
            next.log_success("bind", &name);
            (Outcome::Success(value), next)
        }
        failed => failed,
    })
}

/// Builds a value from the bindings made by `parser`, discarding its own value.
///
/// Closes the capture scope: the state handed on carries no bindings.
pub fn gather<T, U, V, F>(parser: Parser<T, V>, transform: F) -> Parser<U, V>
where
    T: 'static,
    U: 'static,
    V: Clone + 'static,
    F: Fn(&Bindings<V>) -> U + Send + Sync + 'static,
{
    Parser::from_fn(move |state| match parser.invoke(state) {
        (Outcome::Success(_), next) => {
            let value = transform(next.bindings());
            (Outcome::Success(value), next.without_bindings())
        }
        (Outcome::Failure(e), state) => (Outcome::Failure(e), state),
    })
}

/// Like `gather`, for transforms that can reject what was captured.
pub fn try_gather<T, U, V, F>(parser: Parser<T, V>, transform: F) -> Parser<U, V>
where
    T: 'static,
    U: 'static,
    V: Clone + 'static,
    F: Fn(&Bindings<V>) -> Result<U, ParseError> + Send + Sync + 'static,
{
    Parser::from_fn(move |state: ParseState<'_, V>| {
        let start = state.clone();
        match parser.invoke(state) {
            (Outcome::Success(_), next) => match transform(next.bindings()) {
                Ok(value) => (Outcome::Success(value), next.without_bindings()),
                Err(e) => {
                    start.log_failure("try_gather", "", &e);
                    (Outcome::Failure(e), start)
                }
            },
            (Outcome::Failure(e), state) => (Outcome::Failure(e), state),
        }
    })
}

/// Zero or more `item`s separated by `separator`.
///
/// A separator not followed by an item is left unconsumed.
pub fn sep_by<T, S, V>(item: Parser<T, V>, separator: Parser<S, V>) -> Parser<Vec<T>, V>
where
    T: 'static,
    S: 'static,
    V: Clone + 'static,
{
    let rest = many(separator.then(item.clone()));
    Parser::from_fn(move |state: ParseState<'_, V>| match item.invoke(state) {
        (Outcome::Success(first), next) => {
            let (outcome, next) = rest.invoke(next);
            let outcome = outcome.map(|mut values| {
                values.insert(0, first);
                values
            });
            (outcome, next)
        }
        (Outcome::Failure(_), state) => (Outcome::Success(Vec::new()), state),
    })
}

/// Defers building a parser until it is first invoked.
///
/// Lets a rule refer to itself, or to rules defined after it:
///
/// ```
/// use bindparse::prelude::*;
///
/// // nested parentheses around a single digit
/// fn nested() -> Parser<u32> {
///     or([digit(), char('(').then(late(nested)).skip(char(')'))])
/// }
///
/// assert_eq!(run(&nested(), "((7))"), Outcome::Success(7));
/// assert!(run(&nested(), "((7)").is_failure());
/// ```
pub fn late<T, V, F>(thunk: F) -> Parser<T, V>
where
    T: 'static,
    V: Clone + 'static,
    F: Fn() -> Parser<T, V> + Send + Sync + 'static,
{
    let cell: OnceCell<Parser<T, V>> = OnceCell::new();
    Parser::from_fn(move |state| cell.get_or_init(&thunk).invoke(state))
}
