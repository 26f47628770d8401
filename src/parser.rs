use std::fmt::Display;
use std::sync::Arc;

use log::{log_enabled, Level::Trace};

use crate::error::failure;
use crate::logging::Loggable;
use crate::outcome::Outcome;
use crate::state::ParseState;
use crate::{LABEL, LOG_TARGET};

/// What one invocation hands back: the outcome and the state to continue from.
pub type Step<'a, T, V = String> = (Outcome<T>, ParseState<'a, V>);

type ParseFn<T, V> = dyn for<'a> Fn(ParseState<'a, V>) -> Step<'a, T, V> + Send + Sync;

/// A reusable rule producing a `T`, capturing named values of type `V`.
///
/// Parsers are plain values: build them once with the functions in
/// [`primitives`](crate::primitives) and [`combinators`](crate::combinators),
/// then [`run`] them as often as needed, from any thread. Cloning shares the
/// underlying rule.
pub struct Parser<T, V = String> {
    rule: Arc<ParseFn<T, V>>,
}

impl<T, V> Clone for Parser<T, V> {
    fn clone(&self) -> Self {
        Self {
            rule: Arc::clone(&self.rule),
        }
    }
}

/// Parses `input` from the start with no bindings and returns only the outcome.
pub fn run<T, V>(parser: &Parser<T, V>, input: &str) -> Outcome<T>
where
    T: 'static,
    V: Clone + 'static,
{
    let (outcome, _state) = parser.invoke(ParseState::new(input));
    outcome
}

impl<T, V> Parser<T, V>
where
    T: 'static,
    V: Clone + 'static,
{
    /// Wraps a state function as a parser.
    ///
    /// The function must return its input state unchanged whenever it fails;
    /// the backtracking of `or`, `opt` and `many` relies on it.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: for<'a> Fn(ParseState<'a, V>) -> Step<'a, T, V> + Send + Sync + 'static,
    {
        Self { rule: Arc::new(f) }
    }

    #[inline]
    pub fn invoke<'a>(&self, state: ParseState<'a, V>) -> Step<'a, T, V> {
        (self.rule)(state)
    }

    pub fn map<U, F>(self, f: F) -> Parser<U, V>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Parser::from_fn(move |state| {
            let (outcome, state) = self.invoke(state);
            (outcome.map(&f), state)
        })
    }

    /// Like `map`, but a conversion error fails the parse with the error's text.
    pub fn try_map<U, E, F>(self, f: F) -> Parser<U, V>
    where
        U: 'static,
        E: Display,
        F: Fn(T) -> Result<U, E> + Send + Sync + 'static,
    {
        Parser::from_fn(move |state: ParseState<'_, V>| {
            let start = state.clone();
            match self.invoke(state) {
                (Outcome::Success(t), next) => match f(t) {
                    Ok(u) => (Outcome::Success(u), next),
                    Err(e) => {
                        let e = failure(e.to_string());
                        start.log_failure("try_map", "", &e);
                        (Outcome::Failure(e), start)
                    }
                },
                (Outcome::Failure(e), next) => (Outcome::Failure(e), next),
            }
        })
    }

    /// Runs `self` then `other`, keeping the value of `other`.
    pub fn then<U: 'static>(self, other: Parser<U, V>) -> Parser<U, V> {
        self.and(other).map(|(_, u)| u)
    }

    /// Runs `self` then `other`, keeping the value of `self`.
    pub fn skip<U: 'static>(self, other: Parser<U, V>) -> Parser<T, V> {
        self.and(other).map(|(t, _)| t)
    }

    /// Runs `self` then `other`, keeping both values.
    pub fn and<U: 'static>(self, other: Parser<U, V>) -> Parser<(T, U), V> {
        Parser::from_fn(move |state: ParseState<'_, V>| {
            let start = state.clone();
            match self.invoke(state) {
                (Outcome::Success(t), next) => match other.invoke(next) {
                    (Outcome::Success(u), next) => (Outcome::Success((t, u)), next),
                    (Outcome::Failure(e), _) => (Outcome::Failure(e), start),
                },
                (Outcome::Failure(e), _) => (Outcome::Failure(e), start),
            }
        })
    }

    /// Replaces the failure message, leaving successes alone.
    pub fn label(self, message: impl Into<String>) -> Self {
        let message = message.into();
        Parser::from_fn(move |state| match self.invoke(state) {
            (Outcome::Failure(_), state) => (Outcome::Failure(failure(message.as_str())), state),
            success => success,
        })
    }

    /// Names this parser in trace output for the duration of its invocation.
    pub fn debug_context(self, span_name: &'static str) -> Self {
        Parser::from_fn(move |state: ParseState<'_, V>| {
            if !log_enabled!(target: LOG_TARGET, Trace) {
                return self.invoke(state);
            }
            let outer = LABEL.with(|f| f.replace(span_name));
            state.log_inputs("debug_context", span_name);
            let step = self.invoke(state);
            LABEL.with(|f| f.set(outer));
            step
        })
    }
}

#[cfg(test)]
mod tests {
    use std::num::ParseIntError;

    use crate::prelude::*;
    use test_log::test;

    #[test]
    fn test_custom_parser() {
        // a hand written parser: two of the same char
        let twice: Parser<char> = Parser::from_fn(|state: ParseState<'_>| {
            let start = state.clone();
            match any_char().invoke(state) {
                (Outcome::Success(c), next) => match char(c).invoke(next) {
                    (Outcome::Success(_), next) => (Outcome::Success(c), next),
                    (Outcome::Failure(e), _) => (Outcome::Failure(e), start),
                },
                (Outcome::Failure(e), _) => (Outcome::Failure(e), start),
            }
        });
        assert_eq!(run(&twice, "zz!"), Outcome::Success('z'));
        assert!(run(&twice, "zy").is_failure());

        let (outcome, state) = twice.invoke(ParseState::new("aab"));
        assert_eq!(outcome, Outcome::Success('a'));
        assert_eq!(state.remaining(), "b");
        assert_eq!(state.position(), 2);
    }

    #[test]
    fn test_map_and_try_map() {
        let n: Parser<u32> = digit().map(|d| d * 10);
        assert_eq!(run(&n, "4"), Outcome::Success(40));

        let number: Parser<i32> = many_one(digit())
            .map(|ds| ds.iter().map(|d| d.to_string()).collect::<String>())
            .try_map(|s| s.parse::<i32>());
        assert_eq!(run(&number, "0042x"), Outcome::Success(42));

        let small: Parser<u8> = many_one(any_char())
            .map(|cs| cs.into_iter().collect::<String>())
            .try_map(|s: String| -> Result<u8, ParseIntError> { s.parse() });
        let outcome = run(&small, "300");
        assert_eq!(
            outcome.failure().map(|e| e.message()),
            Some("number too large to fit in target type")
        );

        // failure restores the input state
        let (_, state) = small.invoke(ParseState::new("1x"));
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_then_skip_and() {
        let sign_digit: Parser<(char, u32)> = any_of("+-").and(digit());
        assert_eq!(run(&sign_digit, "-7"), Outcome::Success(('-', 7)));

        let right: Parser<u32> = char('(').then(digit()).skip(char(')'));
        assert_eq!(run(&right, "(5)"), Outcome::Success(5));

        let (outcome, state) = right.invoke(ParseState::new("(5]"));
        assert!(outcome.is_failure());
        assert_eq!(state.remaining(), "(5]");
    }

    #[test]
    fn test_label() {
        let p: Parser<u32> = digit().label("expected a score");
        let outcome = run(&p, "x");
        assert_eq!(
            outcome,
            Outcome::Failure(ParseError::new("expected a score"))
        );
        assert_eq!(run(&p, "3"), Outcome::Success(3));
    }

    #[test]
    fn test_debug_context_is_transparent() {
        let p: Parser<String> = string("ab").debug_context("ab-rule");
        assert_eq!(run(&p, "abc"), Outcome::Success("ab".to_string()));
        assert!(run(&p, "ba").is_failure());
    }

    #[test]
    fn test_parsers_are_shareable_across_threads() {
        let p: Parser<Vec<u32>> = many(digit());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let p = p.clone();
                std::thread::spawn(move || run(&p, &i.to_string().repeat(3)))
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            let got = h.join().map_err(|_| "thread panicked");
            assert_eq!(got, Ok(Outcome::Success(vec![i as u32; 3])));
        }
    }
}
