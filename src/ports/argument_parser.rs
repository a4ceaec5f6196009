use std::io::Write;

use crate::domain::{Configuration, ParseError, ParseStrategy};

/// Port for turning raw arguments into a configuration.
pub trait ArgumentParser {
    /// The strategy this parser implements.
    fn strategy(&self) -> ParseStrategy;

    /// Parse `args` (program name excluded).
    ///
    /// Errors whose reporter is [`crate::domain::Reporter::Parser`] are written to
    /// `diagnostics` before being returned; all others are left to the caller.
    fn parse(
        &self,
        args: &[String],
        diagnostics: &mut dyn Write,
    ) -> Result<Configuration, ParseError>;
}
