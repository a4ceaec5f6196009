use greeter::{
    ArgumentParser, Configuration, FlagParser, ParseError, ParseStrategy, Status, run, validate,
};
use std::io::Cursor;

fn args(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn run_greets_with_injected_streams() {
    let mut output = Vec::new();
    let mut diagnostics = Vec::new();

    let status = run(
        ParseStrategy::FlagsWithName,
        "greeter",
        &args(&["-n", "2"]),
        Cursor::new("Bob\n"),
        &mut output,
        &mut diagnostics,
    );

    assert_eq!(status, Status::Success);
    let output = String::from_utf8(output).unwrap();
    assert!(output.ends_with("Nice to meet you Bob\nNice to meet you Bob\n"));
    assert!(diagnostics.is_empty());
}

#[test]
fn parser_validator_pipeline_is_usable_directly() {
    let parser = FlagParser::with_name("greeter");
    let mut sink = Vec::new();

    let config = parser.parse(&args(&["-n", "4", "eve"]), &mut sink).unwrap();
    assert_eq!(
        config,
        Configuration { repeat_count: 4, name: "eve".to_string(), help_requested: false }
    );
    assert!(validate(&config).is_ok());

    let err = parser.parse(&args(&["a", "b"]), &mut sink).unwrap_err();
    assert!(matches!(err, ParseError::TooManyPositionalArguments { allowed: 1 }));
}
