//! greeter: resolve a repeat count and a name from arguments or an interactive prompt,
//! then greet.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::io::{BufRead, Write};

use app::commands::greet::{self, Streams};

pub use app::commands::greet::{NAME_PROMPT, Status, acquire_name, emit_greeting};
pub use domain::{
    AcquisitionError, Configuration, GreeterError, ParseError, ParseStrategy, Reporter, Usage,
    ValidationError, render_usage, validate,
};
pub use ports::ArgumentParser;
pub use services::{FlagParser, ManualParser, parser_for};

/// Run the greeter once.
///
/// `args` excludes the program name. Error text is written to `output`, except
/// for failures the parser reports itself, which go to `diagnostics`.
pub fn run<R, W, E>(
    strategy: ParseStrategy,
    program: &str,
    args: &[String],
    input: R,
    output: W,
    diagnostics: E,
) -> Status
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let parser = parser_for(strategy, program);
    let usage = Usage::new(program, strategy);
    let mut streams = Streams { input, output, diagnostics };
    greet::execute(parser.as_ref(), &usage, args, &mut streams)
}
