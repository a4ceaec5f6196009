use std::fmt;
use std::str::FromStr;

use super::error::ParseError;

/// How raw arguments are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseStrategy {
    /// A single bare token: the repeat count, or `-h`/`-help`.
    Manual,
    /// The `-n` flag and a help flag; no positional arguments.
    Flags,
    /// The `-n` flag, a help flag, and at most one positional name.
    #[default]
    FlagsWithName,
}

/// Who writes a parse failure to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reporter {
    /// Already written to the diagnostics sink by the parser.
    Parser,
    /// Must be written by the caller of the parser.
    Caller,
}

impl ParseStrategy {
    /// All available strategies, simplest first.
    pub const ALL: [ParseStrategy; 3] =
        [ParseStrategy::Manual, ParseStrategy::Flags, ParseStrategy::FlagsWithName];

    /// Name used in `GREETER_PARSER`.
    pub fn key(&self) -> &'static str {
        match self {
            ParseStrategy::Manual => "manual",
            ParseStrategy::Flags => "flags",
            ParseStrategy::FlagsWithName => "flags-with-name",
        }
    }

    /// Maximum number of positional name tokens.
    pub fn positional_limit(&self) -> usize {
        match self {
            ParseStrategy::Manual | ParseStrategy::Flags => 0,
            ParseStrategy::FlagsWithName => 1,
        }
    }

    /// The single designated reporter for `err` under this strategy.
    pub fn reporter(&self, err: &ParseError) -> Reporter {
        match (self, err) {
            (_, ParseError::TooManyPositionalArguments { .. }) => Reporter::Caller,
            (ParseStrategy::Manual, _) => Reporter::Caller,
            (ParseStrategy::Flags | ParseStrategy::FlagsWithName, _) => Reporter::Parser,
        }
    }
}

impl fmt::Display for ParseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ParseStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParseStrategy::ALL.into_iter().find(|strategy| strategy.key() == s.trim()).ok_or_else(|| {
            let known: Vec<&str> = ParseStrategy::ALL.iter().map(ParseStrategy::key).collect();
            format!("Unknown parser '{}': must be one of {}", s, known.join(", "))
        })
    }
}
