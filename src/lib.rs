#![warn(clippy::all)]
#![warn(clippy::correctness)]
#![warn(clippy::style)]
#![warn(clippy::complexity)]
#![warn(clippy::perf)]

/*!
# bindparse
- a library of small parsers combined into bigger ones
- parsers are immutable values, built once and run many times (from any thread)
- failure never consumes input, so alternatives and repetitions backtrack for free

Main concepts:

# Parser
A rule that recognises a prefix of the text and produces a value: `Parser<T, V>`
produces a `T`. Primitives such as [`digit`](primitives::digit) or
[`string`](primitives::string) read characters; combinators such as
[`chain`](combinators::chain), [`or`](combinators::or) and
[`many`](combinators::many) build parsers out of parsers.

# ParseState
The point in the text reached so far, plus any named captures made with
[`bind`](combinators::bind). Captures are collected into a value by
[`gather`](combinators::gather). `V` is the type of the captured values,
`String` unless stated otherwise.

# Outcome
[`run`] hands back `Outcome::Success(value)` or `Outcome::Failure(error)`.

```
use bindparse::prelude::*;

let pair: Parser<(u32, u32)> = gather(
    chain([bind("x", string("12")), string(","), bind("y", string("34"))]),
    |d: &Bindings| {
        let num = |k: &str| d.get(k).and_then(|s| s.parse::<u32>().ok()).unwrap_or_default();
        (num("x"), num("y"))
    },
);
assert_eq!(run(&pair, "12,34"), Outcome::Success((12, 34)));
assert!(run(&pair, "12;34").is_failure());
```

# Logging
Parsing activity is traced with the `log` crate under the target `bp`:
```sh
RUST_LOG=bp=trace cargo test mytest -- --nocapture
```
*/

use std::cell::Cell;

pub mod combinators;
pub mod contrib;
mod error;
mod logging;
mod outcome;
mod parser;
pub mod primitives;
mod state;
pub mod tokens;
mod util;

pub mod prelude;

#[cfg(any(feature = "cookbook", doc))]
pub mod cookbook;

pub(crate) const LOG_TARGET: &str = "bp";

thread_local!(pub(crate) static LABEL: Cell<&'static str> = Cell::new(""));

pub use crate::error::ParseError;
pub use crate::outcome::Outcome;
pub use crate::parser::{run, Parser, Step};
pub use crate::state::{Bindings, ParseState};
