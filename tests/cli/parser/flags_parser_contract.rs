use crate::harness::TestContext;
use crate::harness::test_context::{PROMPT, greetings};
use predicates::prelude::*;

#[test]
fn flags_parser_always_prompts() {
    let ctx = TestContext::with_parser("flags");

    ctx.cli()
        .args(["-n", "1"])
        .write_stdin("Cy\n")
        .assert()
        .success()
        .stdout(format!("{}{}", PROMPT, greetings("Cy", 1)));
}

#[test]
fn flags_parser_rejects_positional_name() {
    let ctx = TestContext::with_parser("flags");

    ctx.cli()
        .args(["-n", "1", "Cy"])
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("Positional arguments specified\n"));
}
