//! Behavior tests for the publish → fallback-log flow.

use std::fs;

use snowbrief_core::{
    compose_post, deliver, CommandPublisher, FallbackLog, MarketSnapshot, PublishError,
    PublishOutcome, Publisher, SectorEntry, SessionSchedule, TurnoverEntry,
};
use snowbrief_tests::cst;
use tempfile::tempdir;
use time::Month;

fn sample_post() -> String {
    let snapshot = MarketSnapshot::new(
        vec![TurnoverEntry::new("600519", "贵州茅台", "12.3亿")],
        vec![SectorEntry::new("半导体", "+3.2%")],
    );
    compose_post(&snapshot, cst(2024, Month::May, 20, 10, 30))
}

#[test]
fn failed_publish_lands_in_the_dated_fallback_log_with_separator() {
    // Given: a posting tool that is not installed
    let dir = tempdir().expect("tempdir");
    let fallback = FallbackLog::new(dir.path().join("logs"));
    let publisher = CommandPublisher::new("snowbrief-no-such-posting-tool");
    let post = sample_post();
    let today = cst(2024, Month::May, 20, 10, 30).date();

    // When: the cycle delivers the post
    let outcome = deliver(&post, &publisher, &fallback, today).expect("fallback never errors here");

    // Then: the post is recoverable from logs/tweet-<date>.log
    let PublishOutcome::FailedAndLogged { path, error } = outcome else {
        panic!("expected FailedAndLogged");
    };
    assert!(matches!(error, PublishError::Spawn { .. }));
    assert!(path.ends_with("tweet-2024-05-20.log"));
    let contents = fs::read_to_string(&path).expect("log readable");
    assert_eq!(contents, format!("\n---\n{post}\n"));
}

#[cfg(unix)]
#[test]
fn posting_tool_nonzero_exit_is_a_command_failure() {
    // `false` exists everywhere on unix and ignores its arguments.
    let publisher = CommandPublisher::new("false").with_subcommand("post");
    assert_eq!(publisher.program(), "false");
    let err = publisher.publish("post").expect_err("false always fails");
    assert!(matches!(err, PublishError::CommandFailed { .. }));
}

#[cfg(unix)]
#[test]
fn posting_tool_zero_exit_publishes_without_logging() {
    let dir = tempdir().expect("tempdir");
    let fallback = FallbackLog::new(dir.path().join("logs"));
    let publisher = CommandPublisher::new("true");
    let today = cst(2024, Month::May, 20, 10, 30).date();

    let outcome = deliver(&sample_post(), &publisher, &fallback, today).expect("deliver");
    assert!(outcome.published());
    assert!(!fallback.dir().exists(), "no fallback file on success");
}

#[test]
fn gate_skip_writes_nothing() {
    // Given: a trigger during the lunch recess
    let dir = tempdir().expect("tempdir");
    let fallback = FallbackLog::new(dir.path().join("logs"));
    let now = cst(2024, Month::May, 20, 12, 0);

    // When: the gate says skip, the cycle ends before any fetch or write
    let decision = SessionSchedule::default().decide(now.time());

    // Then: nothing was created
    assert!(!decision.proceeds());
    assert!(!fallback.dir().exists());
    assert!(!fallback.file_for(now.date()).exists());
}

#[test]
fn two_failed_cycles_accumulate_in_the_same_daily_file() {
    let dir = tempdir().expect("tempdir");
    let fallback = FallbackLog::new(dir.path().join("logs"));
    let publisher = CommandPublisher::new("snowbrief-no-such-posting-tool");
    let today = cst(2024, Month::May, 20, 10, 30).date();

    deliver("first", &publisher, &fallback, today).expect("deliver");
    let outcome = deliver("second", &publisher, &fallback, today).expect("deliver");

    let PublishOutcome::FailedAndLogged { path, .. } = outcome else {
        panic!("expected FailedAndLogged");
    };
    let contents = fs::read_to_string(path).expect("log readable");
    assert_eq!(contents, "\n---\nfirst\n\n---\nsecond\n");
}
