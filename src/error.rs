use std::fmt;

/// The single failure kind produced by parsers.
///
/// The message is advisory text meant for people, not a structured code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[inline]
pub(crate) fn failure(message: impl Into<String>) -> ParseError {
    ParseError::new(message)
}

/// Renders the head of the input for "got ..." messages.
pub(crate) fn describe_head(head: Option<char>) -> String {
    match head {
        Some(c) => format!("`{c}`"),
        None => String::from("end of input"),
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseFailure: {msg}", msg = self.message)
    }
}

impl std::error::Error for ParseError {}
