use crate::error::ParseError;

/// The answer of a parser invocation: a value, or the reason there is none.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure(ParseError),
}

impl<T> Outcome<T> {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(..))
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Transforms the success value, passing a failure through untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(t) => Outcome::Success(f(t)),
            Self::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Folds either variant into a single value.
    ///
    /// ```
    /// use bindparse::prelude::*;
    ///
    /// let digits: Parser<Vec<u32>> = many_one(digit());
    /// let text = run(&digits, "12").extract(|e| e.to_string(), |v| format!("{v:?}"));
    /// assert_eq!(text, "[1, 2]");
    /// ```
    pub fn extract<U, E, S>(self, on_failure: E, on_success: S) -> U
    where
        E: FnOnce(ParseError) -> U,
        S: FnOnce(T) -> U,
    {
        match self {
            Self::Success(t) => on_success(t),
            Self::Failure(e) => on_failure(e),
        }
    }

    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(t) => Some(t),
            Self::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ParseError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(e) => Some(e),
        }
    }

    pub fn into_result(self) -> Result<T, ParseError> {
        self.into()
    }
}

impl<T> From<Outcome<T>> for Result<T, ParseError> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(t) => Ok(t),
            Outcome::Failure(e) => Err(e),
        }
    }
}

impl<T> From<Result<T, ParseError>> for Outcome<T> {
    fn from(result: Result<T, ParseError>) -> Self {
        match result {
            Ok(t) => Self::Success(t),
            Err(e) => Self::Failure(e),
        }
    }
}
