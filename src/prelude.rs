pub use crate::combinators::{
    bind, chain, gather, late, many, many_one, opt, or, sep_by, seq, try_gather,
};
pub use crate::primitives::{any_char, any_of, char, digit, eof, letter, none_of, satisfy, string};
pub use crate::{run, Bindings, Outcome, ParseError, ParseState, Parser, Step};

pub mod bp {
    pub use crate::contrib::parsers;
    pub use crate::tokens::{tokenize, Tokenizer};
}
