mod flag_parser;
mod manual_parser;

pub use flag_parser::FlagParser;
pub use manual_parser::ManualParser;

use crate::domain::ParseStrategy;
use crate::ports::ArgumentParser;

/// Build the parser for `strategy`, labelling usage text with `program`.
pub fn parser_for(strategy: ParseStrategy, program: &str) -> Box<dyn ArgumentParser> {
    match strategy {
        ParseStrategy::Manual => Box::new(ManualParser::new()),
        ParseStrategy::Flags => Box::new(FlagParser::flags_only(program)),
        ParseStrategy::FlagsWithName => Box::new(FlagParser::with_name(program)),
    }
}
