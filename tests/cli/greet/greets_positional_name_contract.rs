use crate::harness::TestContext;
use crate::harness::test_context::greetings;

#[test]
fn greets_positional_name_n_times() {
    let ctx = TestContext::new();

    ctx.cli().args(["-n", "3", "alice"]).assert().success().stdout(greetings("alice", 3));
}

#[test]
fn count_flag_may_follow_equals_sign() {
    let ctx = TestContext::new();

    ctx.cli().args(["-n=2", "Bob Smith"]).assert().success().stdout(greetings("Bob Smith", 2));
}

#[test]
fn identical_invocations_produce_identical_output() {
    let ctx = TestContext::new();

    let first = ctx.cli().args(["-n", "2", "zoe"]).output().unwrap();
    let second = ctx.cli().args(["-n", "2", "zoe"]).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}
