//! A comma separated list of words, and how failures read.

use crate::contrib::parsers::spaces;
use crate::prelude::*;

fn word() -> Parser<String> {
    many_one(letter()).map(|cs| cs.into_iter().collect())
}

/// `[a, b, c]`
pub fn word_list() -> Parser<Vec<String>> {
    let comma = spaces().then(char(',')).skip(spaces());
    char('[')
        .then(sep_by(word(), comma))
        .skip(char(']'))
        .skip(eof())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_word_list() -> Result<(), ParseError> {
        let p = word_list();
        let words = run(&p, "[fox, dog ,cat]").into_result()?;
        assert_eq!(words, ["fox", "dog", "cat"]);

        assert_eq!(run(&p, "[]"), Outcome::Success(vec![]));
        Ok(())
    }

    #[test]
    fn test_failures() {
        let p = word_list();
        // trailing comma is left for `]`, which then fails
        assert_eq!(
            run(&p, "[fox,]"),
            Outcome::Failure(ParseError::new("expected char `]`, got `,`"))
        );
        assert_eq!(
            run(&p, "[fox] tail"),
            Outcome::Failure(ParseError::new("expected end of input at position 5"))
        );
    }
}
