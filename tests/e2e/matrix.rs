use crate::common::harness::TerminalTestHarness;
use std::time::Duration;

#[test]
fn test_matrix_overlay_expires_after_five_seconds() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.submit("matrix").unwrap();
    assert!(harness.terminal().matrix().is_some());

    harness.advance(Duration::from_secs(1));
    harness.render().unwrap();
    harness.assert_screen_not_contains("command-center");

    harness.advance(Duration::from_millis(3990));
    assert!(harness.terminal().matrix().is_some());
    harness.advance(Duration::from_millis(10));
    assert!(harness.terminal().matrix().is_none());

    harness.render().unwrap();
    harness.assert_screen_contains("command-center");
    harness.assert_screen_contains("Matrix mode activated for 5 seconds...");
}

#[test]
fn test_matrix_covers_whole_screen() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.submit("matrix").unwrap();
    let rain = harness.terminal().matrix().unwrap();
    assert_eq!((rain.columns(), rain.rows()), (80, 24));
}

#[test]
fn test_relaunch_extends_single_overlay() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.submit("matrix").unwrap();
    harness.advance(Duration::from_secs(3));
    harness.submit("matrix").unwrap();

    harness.advance(Duration::from_secs(3));
    assert!(harness.terminal().matrix().is_some());
    harness.advance(Duration::from_secs(2));
    assert!(harness.terminal().matrix().is_none());
}

#[test]
fn test_typing_continues_during_rain() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.submit("matrix").unwrap();
    harness.run("whois").unwrap();

    assert!(harness.terminal().matrix().is_none());
    assert_eq!(harness.output_of("whois").len(), 4);
}
