use crate::harness::TestContext;
use predicates::prelude::*;

const MESSAGE: &str = "More than one positional argument specified";

#[test]
fn second_positional_is_reported_exactly_once() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["-n", "3", "alice", "bob"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stdout.starts_with(MESSAGE));
    assert_eq!(stdout.matches(MESSAGE).count() + stderr.matches(MESSAGE).count(), 1);
    assert!(!stdout.contains("Nice to meet you"));
}

#[test]
fn extra_positional_does_not_prompt() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["-n", "1", "a", "b"])
        .write_stdin("Bob\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Your name please?").not());
}
