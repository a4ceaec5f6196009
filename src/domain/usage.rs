use std::io::{self, Write};

use super::parse_strategy::ParseStrategy;

const DESCRIPTION: &str =
    "A greeter application which prints the name you entered a specified number of times.";

/// Everything the usage text depends on, passed explicitly to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usage {
    program: String,
    strategy: ParseStrategy,
}

impl Usage {
    pub fn new<S: Into<String>>(program: S, strategy: ParseStrategy) -> Self {
        Self { program: program.into(), strategy }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// The synopsis line without the leading `Usage:`.
    pub fn synopsis(&self) -> String {
        let args = match self.strategy {
            ParseStrategy::Manual => "<integer> [-h|-help]",
            ParseStrategy::Flags => "[-n <int>] [-h|--help]",
            ParseStrategy::FlagsWithName => "[-n <int>] [-h|--help] [name]",
        };
        format!("{} {}", self.program, args)
    }
}

/// Write the usage block for `usage` to `out`.
pub fn render_usage<W: Write + ?Sized>(out: &mut W, usage: &Usage) -> io::Result<()> {
    writeln!(out, "{}", DESCRIPTION)?;
    writeln!(out, "Usage: {}", usage.synopsis())?;
    writeln!(out)?;
    match usage.strategy {
        ParseStrategy::Manual => {
            writeln!(out, "Arguments:")?;
            writeln!(out, "  <integer>   Number of times to greet")?;
        }
        ParseStrategy::Flags | ParseStrategy::FlagsWithName => {
            writeln!(out, "Options:")?;
            writeln!(out, "  -n <int>    Number of times to greet (default 0)")?;
        }
    }
    Ok(())
}
