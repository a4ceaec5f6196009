mod argument_parser;

pub use argument_parser::ArgumentParser;
