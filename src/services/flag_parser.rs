use std::io::Write;

use clap::error::{ContextKind, ContextValue, Error as ClapError, ErrorKind};
use clap::{Arg, ArgAction, Command};
use tracing::{debug, warn};

use crate::domain::{Configuration, ParseError, ParseStrategy, Usage, render_usage};
use crate::ports::ArgumentParser;

const COUNT: &str = "count";
const NAME: &str = "name";

/// Flag-based parser built on clap, with or without a positional name slot.
///
/// Flag-level failures (bad `-n` values, unknown flags) are written to the
/// diagnostics sink together with the usage text and returned; the caller must
/// not print them again. Positional overflow is returned silently. A help token
/// before any `--` terminator wins over every other argument.
///
/// Flags stop at the first positional token, and a repeated `-n` keeps its last value.
#[derive(Debug, Clone)]
pub struct FlagParser {
    strategy: ParseStrategy,
    usage: Usage,
}

impl FlagParser {
    /// `-n` and help only; any positional token is an error.
    pub fn flags_only<S: Into<String>>(program: S) -> Self {
        Self::build(program, ParseStrategy::Flags)
    }

    /// `-n`, help, and at most one positional name.
    pub fn with_name<S: Into<String>>(program: S) -> Self {
        Self::build(program, ParseStrategy::FlagsWithName)
    }

    fn build<S: Into<String>>(program: S, strategy: ParseStrategy) -> Self {
        Self { strategy, usage: Usage::new(program, strategy) }
    }

    fn command(&self) -> Command {
        Command::new(self.usage.program().to_string())
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .args_override_self(true)
            .arg(
                Arg::new(COUNT)
                    .short('n')
                    .value_name("int")
                    .num_args(1)
                    .allow_negative_numbers(true)
                    .help("Number of times to greet"),
            )
            .arg(Arg::new(NAME).action(ArgAction::Append).num_args(1..).trailing_var_arg(true))
    }

    fn report(&self, diagnostics: &mut dyn Write, err: ParseError) -> ParseError {
        let written = writeln!(diagnostics, "{}", err)
            .and_then(|_| render_usage(diagnostics, &self.usage));
        if let Err(io_err) = written {
            warn!(error = %io_err, "failed to write parse diagnostics");
        }
        err
    }
}

impl ArgumentParser for FlagParser {
    fn strategy(&self) -> ParseStrategy {
        self.strategy
    }

    fn parse(
        &self,
        args: &[String],
        diagnostics: &mut dyn Write,
    ) -> Result<Configuration, ParseError> {
        if args.iter().take_while(|arg| *arg != "--").any(|arg| is_help_token(arg)) {
            debug!("help requested");
            return Ok(Configuration::help());
        }

        let matches = self.command().try_get_matches_from(args).map_err(|err| {
            let message = describe(&err, args);
            self.report(diagnostics, ParseError::InvalidFlag { message })
        })?;

        let repeat_count = match matches.get_one::<String>(COUNT) {
            Some(token) => token.parse::<i64>().map_err(|_| {
                self.report(diagnostics, ParseError::InvalidNumberFormat { token: token.clone() })
            })?,
            None => 0,
        };

        let mut names: Vec<String> = matches
            .get_many::<String>(NAME)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        let allowed = self.strategy.positional_limit();
        if names.len() > allowed {
            return Err(ParseError::TooManyPositionalArguments { allowed });
        }

        let name = names.pop().unwrap_or_default();
        Ok(Configuration { repeat_count, name, help_requested: false })
    }
}

fn is_help_token(arg: &str) -> bool {
    matches!(arg, "-h" | "-help" | "--help")
}

fn describe(err: &ClapError, args: &[String]) -> String {
    let reported = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.as_str(),
        _ => "",
    };
    match err.kind() {
        ErrorKind::InvalidValue if is_missing_value(err) => {
            "flag needs an argument: -n".to_string()
        }
        ErrorKind::UnknownArgument => {
            format!("flag provided but not defined: {}", offending_token(reported, args))
        }
        kind => {
            let text = kind.as_str().unwrap_or("invalid arguments");
            if reported.is_empty() {
                text.to_string()
            } else {
                format!("{}: {}", text, reported)
            }
        }
    }
}

fn is_missing_value(err: &ClapError) -> bool {
    match err.get(ContextKind::InvalidValue) {
        Some(ContextValue::String(value)) => value.is_empty(),
        Some(_) => false,
        None => true,
    }
}

/// clap names only the first unknown short of a cluster (`-b` for `-bob`); recover the
/// token the user typed.
fn offending_token<'a>(reported: &'a str, args: &'a [String]) -> &'a str {
    args.iter()
        .take_while(|arg| *arg != "--")
        .find(|arg| !reported.is_empty() && arg.starts_with('-') && arg.starts_with(reported))
        .map(String::as_str)
        .unwrap_or(reported)
}
