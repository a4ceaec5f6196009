use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::{debug, warn};

use crate::domain::{
    AcquisitionError, Configuration, GreeterError, Reporter, Usage, render_usage, validate,
};
use crate::ports::ArgumentParser;

/// Prompt written before reading the name.
pub const NAME_PROMPT: &str = "Your name please? Press the Enter key when done.\n";

/// Completion signal of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// Caller-owned streams a run reads from and writes to.
pub struct Streams<R, W, E> {
    pub input: R,
    pub output: W,
    /// Sink for diagnostics written by the parser itself.
    pub diagnostics: E,
}

/// Execute one greeter run: parse, validate, acquire the name if missing, greet.
///
/// Every failure is written exactly once before `Status::Failure` is returned.
pub fn execute<R, W, E>(
    parser: &dyn ArgumentParser,
    usage: &Usage,
    args: &[String],
    streams: &mut Streams<R, W, E>,
) -> Status
where
    R: BufRead,
    W: Write,
    E: Write,
{
    match resolve_and_greet(parser, usage, args, streams) {
        Ok(()) => Status::Success,
        Err(err) => {
            warn!(error = %err, kind = ?err.kind(), "greeter run failed");
            if let Err(io_err) = report(parser, usage, &err, streams) {
                warn!(error = %io_err, "failed to report error");
            }
            Status::Failure
        }
    }
}

fn resolve_and_greet<R, W, E>(
    parser: &dyn ArgumentParser,
    usage: &Usage,
    args: &[String],
    streams: &mut Streams<R, W, E>,
) -> Result<(), GreeterError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut config = parser.parse(args, &mut streams.diagnostics)?;
    debug!(strategy = %parser.strategy(), ?config, "parsed");

    if config.help_requested {
        render_usage(&mut streams.output, usage)?;
        streams.output.flush()?;
        return Ok(());
    }

    validate(&config)?;
    debug!(repeat_count = config.repeat_count, "validated");

    if config.needs_name() {
        config.name = acquire_name(&mut streams.input, &mut streams.output)?;
    }
    debug!(name = %config.name, "name resolved");

    emit_greeting(&config, &mut streams.output)?;
    debug!("emitted");
    Ok(())
}

/// Write the single user-facing report for `err`.
fn report<R, W, E>(
    parser: &dyn ArgumentParser,
    usage: &Usage,
    err: &GreeterError,
    streams: &mut Streams<R, W, E>,
) -> io::Result<()>
where
    W: Write,
    E: Write,
{
    let out = &mut streams.output;
    match err {
        GreeterError::Parse(parse_err) => match parser.strategy().reporter(parse_err) {
            Reporter::Parser => return Ok(()),
            Reporter::Caller => {
                writeln!(out, "{}", parse_err)?;
                render_usage(out, usage)?;
            }
        },
        GreeterError::Validation(validation_err) => {
            writeln!(out, "{}", validation_err)?;
            render_usage(out, usage)?;
        }
        GreeterError::Acquisition(acquisition_err) => {
            writeln!(out, "{}", acquisition_err)?;
        }
        GreeterError::Output(_) => {
            // The output stream is what broke.
            writeln!(streams.diagnostics, "{}", err)?;
            return streams.diagnostics.flush();
        }
    }
    out.flush()
}

/// Prompt on `output` and read one line from `input` as the name.
pub fn acquire_name<R, W>(input: &mut R, output: &mut W) -> Result<String, GreeterError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    output.write_all(NAME_PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(AcquisitionError::ReadFailure)?;

    let name = line.trim();
    if name.is_empty() {
        return Err(AcquisitionError::EmptyName.into());
    }
    Ok(name.to_string())
}

/// Write the greeting line `repeat_count` times.
pub fn emit_greeting<W: Write + ?Sized>(config: &Configuration, output: &mut W) -> io::Result<()> {
    let line = format!("Nice to meet you {}\n", config.name);
    for _ in 0..config.repeat_count {
        output.write_all(line.as_bytes())?;
    }
    output.flush()
}
