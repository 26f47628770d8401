/*!
# Cookbook

Worked grammars, each chapter a small module with its tests.

# Building blocks
Parsers are values. A grammar is a handful of functions each returning a
`Parser`, composed from primitives (`char`, `digit`, `string`, ...) and
combinators (`chain`, `seq`, `or`, `many`, `opt`, ...). Nothing is parsed
until [`run`](crate::run) is called.

```
use bindparse::prelude::*;

let greeting: Parser<String> = chain([string("Hello"), string(", "), string("World")]);
assert_eq!(run(&greeting, "Hello, World!"), Outcome::Success("World".to_string()));
```

# Captures
`bind` names an intermediate value; `gather` turns the named values into a
result once the enclosed parser has succeeded. See
[`ch_2_binding_vars`].

# Recursion
A rule that mentions itself goes through `late`, see [`ch_3_recursion`].

# Choosing a binding type
`Parser<T>` is shorthand for `Parser<T, String>`: bound values are strings.
When a grammar captures values of several kinds, bind an enum instead, as in
[`ch_2_binding_vars`].

# Testing

Using a logging framework for test-harnesses is encouraged

```toml
[dev-dependencies]
env_logger = "0.10"
test-log = {version = "0.2"}
```

This will allow the action of parsing to be traced with
```sh
RUST_LOG=bp=trace cargo test mytest -- --nocapture
```
*/

pub mod ch_1_getting_started;
pub mod ch_2_binding_vars;
pub mod ch_3_recursion;
pub mod ch_4_enum_strum;
