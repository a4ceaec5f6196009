use std::io::Write;

use tracing::debug;

use crate::domain::{Configuration, ParseError, ParseStrategy};
use crate::ports::ArgumentParser;

/// Parses a single bare token without any flag machinery.
///
/// The only accepted shapes are `<integer>` and `-h`/`-help`; a help token anywhere
/// wins over everything else. This parser has no
/// sink of its own, so every error it returns is reported by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualParser;

impl ManualParser {
    pub fn new() -> Self {
        Self
    }
}

impl ArgumentParser for ManualParser {
    fn strategy(&self) -> ParseStrategy {
        ParseStrategy::Manual
    }

    fn parse(
        &self,
        args: &[String],
        _diagnostics: &mut dyn Write,
    ) -> Result<Configuration, ParseError> {
        if args.iter().any(|arg| is_help_token(arg)) {
            debug!("help requested");
            return Ok(Configuration::help());
        }

        let [token] = args else {
            return Err(ParseError::WrongArgumentCount { found: args.len() });
        };

        let repeat_count = token
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidNumberFormat { token: token.clone() })?;

        Ok(Configuration { repeat_count, ..Configuration::default() })
    }
}

fn is_help_token(arg: &str) -> bool {
    arg == "-h" || arg == "-help"
}
