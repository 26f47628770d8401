//! Splitting raw text into tokens at delimiter boundaries.
//!
//! Independent of [`Parser`](crate::Parser): a tokenizer is a plain function
//! from text to a list of strings.

use std::collections::HashSet;

use log::trace;

use crate::LOG_TARGET;

/// Splits text at each delimiter, keeping the delimiters as tokens of their own.
///
/// Delimiters are applied in the order given, each one re-splitting the
/// pieces left by the previous ones. Empty pieces, and pieces equal to one of
/// the exclusions, are dropped from the result.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    delimiters: Vec<String>,
    exclusions: HashSet<String>,
}

impl Tokenizer {
    pub fn new<D, E>(delimiters: D, exclusions: E) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            delimiters: delimiters
                .into_iter()
                .map(Into::into)
                .filter(|d: &String| !d.is_empty())
                .collect(),
            exclusions: exclusions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut pieces = vec![text.to_string()];
        for delim in &self.delimiters {
            pieces = pieces
                .iter()
                .flat_map(|piece| split_keeping(piece, delim))
                .collect();
        }
        let tokens: Vec<String> = pieces
            .into_iter()
            .filter(|t| !t.is_empty() && !self.exclusions.contains(t))
            .collect();
        trace!(target: LOG_TARGET, "tokenize -> {n} tokens", n = tokens.len());
        tokens
    }
}

/// `text` cut at every `delim`, with each `delim` kept between the cuts.
fn split_keeping(text: &str, delim: &str) -> Vec<String> {
    let mut out = Vec::new();
    for (i, part) in text.split(delim).enumerate() {
        if i > 0 {
            out.push(delim.to_string());
        }
        out.push(part.to_string());
    }
    out
}

/// A tokenizing function for the given delimiters and exclusions.
///
/// ```
/// use bindparse::tokens::tokenize;
///
/// let words = tokenize([" "], [" "]);
/// assert_eq!(words("1 2 3"), ["1", "2", "3"]);
/// ```
pub fn tokenize<D, E>(delimiters: D, exclusions: E) -> impl Fn(&str) -> Vec<String>
where
    D: IntoIterator,
    D::Item: Into<String>,
    E: IntoIterator,
    E::Item: Into<String>,
{
    let tokenizer = Tokenizer::new(delimiters, exclusions);
    move |text: &str| tokenizer.tokenize(text)
}
