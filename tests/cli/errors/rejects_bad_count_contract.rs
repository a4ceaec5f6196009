use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn non_integer_count_is_reported_once_on_stderr() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["-n", "three", "alice"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stdout.is_empty());
    assert_eq!(stderr.matches("\"three\"").count(), 1);
    assert!(stderr.contains("Usage: greeter"));
}

#[test]
fn unknown_flag_is_reported_on_stderr() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--loud", "alice"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--loud"));
}
