use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn zero_count_prints_error_then_usage() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["-n", "0", "alice"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Must specify a number greater than 0\n"))
        .stdout(predicate::str::contains("Usage: greeter"));
}

#[test]
fn negative_count_is_rejected_before_prompting() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["-n", "-5"])
        .write_stdin("Bob\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Must specify a number greater than 0"))
        .stdout(predicate::str::contains("Your name please?").not());
}

#[test]
fn missing_count_defaults_to_zero_and_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("alice")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Must specify a number greater than 0"));
}
